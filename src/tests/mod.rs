mod chat;
mod fixture;
