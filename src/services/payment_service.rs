use crate::models::PaymentSplit;

/// Recargo que paga la empresa sobre la donación
pub const COMPANY_SURCHARGE: f64 = 1.05;

/// Simulación de reparto. Sin redondeo ni validación de negativos/NaN:
/// eso queda a cargo de quien llama.
pub fn calculate_split(donation_amount: f64) -> PaymentSplit {
    PaymentSplit {
        company_pays: donation_amount * COMPANY_SURCHARGE,
        osc_receives: donation_amount,
    }
}
