//! BDD step definitions for the trash dashboard
