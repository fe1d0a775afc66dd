pub mod conflict;
pub mod effective;
pub mod split;
