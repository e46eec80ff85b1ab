/// Image decoding into grayscale layers.
pub(crate) mod decode;
