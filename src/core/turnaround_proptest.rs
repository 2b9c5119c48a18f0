//! Property-based tests for turnaround parsing and formatting
