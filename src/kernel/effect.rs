#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadPaymentCode { image_ref: String },
}
