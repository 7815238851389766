//! Route groups mounted by [`crate::app`].

pub mod controller;
pub mod health;
pub mod todo_items;
