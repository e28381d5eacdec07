//! Core data models for the person service.
//!
//! This module contains the domain models used throughout the service.

mod person;

pub use person::Person;
