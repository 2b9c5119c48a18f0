//! Property-based tests for the due date calculation
//!
//! These verify the calculation's structural guarantees over arbitrary
//! valid inputs: the result always lands inside a working window, grows
//! monotonically with the turnaround, and a full-workday turnaround moves
//! exactly one working day ahead.
