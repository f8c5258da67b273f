mod compute;
mod helpers;
mod identity;
mod inventory;
