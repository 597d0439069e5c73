pub mod chat;
pub mod city;
pub mod confidence;
pub mod history;

pub use chat::*;
pub use city::*;
pub use confidence::*;
pub use history::*;
