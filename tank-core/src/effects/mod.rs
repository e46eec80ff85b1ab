/// Role-dependent luminance bias.
pub(crate) mod darken;
/// Luminance-difference alpha merge.
pub(crate) mod merge;
