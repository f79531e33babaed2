//! Integration tests for Layer 3: Play
//!
//! Drives whole sessions over blueprint-built worlds through a scripted
//! console, from welcome text to the farewell line.

mod disambiguation;
