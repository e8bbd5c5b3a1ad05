#[cfg(test)]
pub mod impl_fake;
pub mod impl_console;
pub mod interface;
