//! Weather screen - locate, fetch OpenWeather conditions and forecast, render
//!
//! The library holds the store (state, actions, reducer, effects), the
//! OpenWeather and location clients, and the components; `main.rs` wires
//! them into the tui-dispatch runtime.

pub mod action;
pub mod api;
pub mod backdrop;
pub mod components;
pub mod condition;
pub mod config;
pub mod effect;
pub mod forecast;
pub mod location;
pub mod reducer;
pub mod state;
pub mod tasks;
