use serde::{Deserialize, Serialize};

/// Reparto de una donación: la empresa paga un recargo fijo del 5%
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSplit {
    pub company_pays: f64,
    pub osc_receives: f64,
}
