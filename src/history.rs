pub mod impl_csv;
#[cfg(test)]
pub mod impl_fake;
pub mod interface;
pub mod record;
pub mod summary;
