//! Test suite for the Linear IR data model.
