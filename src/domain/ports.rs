use crate::utils::error::Result;

/// Two-way conversion between a model value `M` and the presentation value `P`
/// handed to a template.
///
/// Both directions map `None` to `None` without error, and neither keeps
/// state between calls.
pub trait ModelEncoder<M, P>: Send + Sync {
    fn encode(&self, model_value: Option<&M>) -> Option<P>;
    fn decode(&self, presentation_value: Option<&P>) -> Result<Option<M>>;
}
