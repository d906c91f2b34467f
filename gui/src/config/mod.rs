// GUI configuration module
pub mod theme;
