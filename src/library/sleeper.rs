#[cfg(test)]
pub mod impl_fake;
pub mod impl_thread;
pub mod interface;
