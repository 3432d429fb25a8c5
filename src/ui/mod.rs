//! UI module - custom widgets used by the page views

pub mod components;
