pub mod kv;
pub mod matrix;

#[cfg_attr(
    docsrs,
    doc(cfg(any(feature = "compression-gzip", feature = "compression-zip")))
)]
#[cfg(any(feature = "compression-gzip", feature = "compression-zip"))]
pub mod compression;
