pub mod decode;
pub mod encode;
pub mod generate;
pub mod list;
