mod catalog;
mod credentials;
mod identity;
