//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Signed-in pages wrap their body in `ProtectedPage`; guest
//! pages install the signed-in redirect themselves.

pub mod home;
pub mod login;
pub mod member_add;
pub mod member_search;
pub mod register;
pub mod sales;
