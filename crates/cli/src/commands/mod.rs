pub(crate) mod barcode;
pub(crate) mod lookup;
pub(crate) mod serve;
