//! Política de opciones de pago del paso "payment".
//!
//! La distinción central: una condición estructural (host distinto, tipo no
//! soportado, prepago fijado a otro host) EXCLUYE la opción del conjunto; un
//! saldo insuficiente la DESHABILITA pero la deja visible. El orden de los
//! filtros es parte del contrato observable (los errores de perfil colectivo
//! se evalúan antes que los filtros por tipo).

use serde::de::DeserializeOwned;
use serde_json::Value;
use stepflow_core::{OptionEntry, OptionResolver, OptionSet, ResolveError, StepValues};
use stepflow_domain::{ContributionDetails, ContributorProfile, PaymentInstrument, PaymentMethodType,
                      ProfileType, ReferenceSnapshot};

/// Resolver determinista del conjunto de opciones de pago.
///
/// Entradas: valores de los pasos "profile" y "details" más el snapshot de
/// referencia. Mismas entradas producen el mismo conjunto, orden incluido.
pub struct PaymentOptionResolver;

fn dependency<T: DeserializeOwned>(values: &StepValues, step: &str) -> Result<T, ResolveError> {
    let value = values.get(step)
                      .filter(|v| !v.is_null())
                      .ok_or_else(|| ResolveError::MissingDependency(step.to_string()))?;
    serde_json::from_value(value.clone())
        .map_err(|e| ResolveError::MalformedReference(format!("step '{step}': {e}")))
}

fn instrument_entry(pm: &PaymentInstrument) -> OptionEntry {
    let metadata = serde_json::to_value(pm).unwrap_or(Value::Null);
    OptionEntry::new(&format!("pm-{}", pm.id), &pm.name).disabled(pm.below_minimum())
                                                        .metadata(metadata)
}

impl OptionResolver for PaymentOptionResolver {
    fn resolve(&self, values: &StepValues, reference: &Value) -> Result<OptionSet, ResolveError> {
        let profile: ContributorProfile = dependency(values, "profile")?;
        let details: ContributionDetails = dependency(values, "details")?;
        let snapshot = ReferenceSnapshot::from_value(reference)
            .map_err(|e| ResolveError::MalformedReference(e.to_string()))?;

        // deduplicación por id conservando el orden del servidor
        let mut seen: Vec<&str> = Vec::new();
        let mut instruments: Vec<&PaymentInstrument> = Vec::new();
        for pm in &snapshot.instruments {
            if !seen.contains(&pm.id.as_str()) {
                seen.push(pm.id.as_str());
                instruments.push(pm);
            }
        }

        if profile.kind == ProfileType::Collective {
            // balance colectivo a colectivo: sólo bajo el mismo host
            if profile.host_id.as_deref() != Some(snapshot.host_id.as_str()) {
                return Err(ResolveError::DifferentHost);
            }
            if instruments.iter()
                          .any(|pm| pm.kind == PaymentMethodType::Collective && pm.below_minimum())
            {
                return Err(ResolveError::LowBalance);
            }
        }

        // una organización no paga con balance de colectivo
        if profile.kind == ProfileType::Organization {
            instruments.retain(|pm| pm.kind != PaymentMethodType::Collective);
        }

        // prepago: sólo utilizable en el host al que está fijado
        instruments.retain(|pm| match pm.kind {
                       PaymentMethodType::Prepaid => {
                           pm.pinned_host_id.as_deref() == Some(snapshot.host_id.as_str())
                       }
                       _ => true,
                   });

        // gift cards limitadas a hosts concretos
        instruments.retain(|pm| match (&pm.kind, &pm.limited_to_host_ids) {
                       (PaymentMethodType::VirtualCard, Some(hosts)) => hosts.contains(&snapshot.host_id),
                       _ => true,
                   });

        // tarjetas guardadas sólo si el host procesa tarjetas
        if !snapshot.supports(PaymentMethodType::CreditCard) {
            instruments.retain(|pm| pm.kind != PaymentMethodType::CreditCard);
        }

        let mut entries: Vec<OptionEntry> = instruments.iter().map(|pm| instrument_entry(pm)).collect();

        // opciones sintéticas, nunca para perfiles colectivos
        if profile.kind != ProfileType::Collective {
            if snapshot.supports(PaymentMethodType::CreditCard) {
                entries.push(OptionEntry::new("newCreditCard", "New credit/debit card"));
            }
            if snapshot.supports(PaymentMethodType::Paypal) {
                entries.push(OptionEntry::new("paypal", "PayPal"));
            }
            // la transferencia manual no admite contribuciones recurrentes
            if snapshot.supports(PaymentMethodType::BankTransfer) && !details.is_recurring() {
                let title = snapshot.manual_title.clone().unwrap_or_else(|| "Bank transfer".to_string());
                entries.push(OptionEntry::new("manual", &title));
            }
        }

        if entries.is_empty() {
            return Err(ResolveError::NoOptionsAvailable);
        }
        Ok(OptionSet::new(entries))
    }
}
