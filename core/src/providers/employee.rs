//! Employee context trait.

/// The employee acting on the current request.
pub trait EmployeeContext: Send + Sync {
    /// Id of the logged-in employee, `None` for anonymous requests.
    fn employee_id(&self) -> Option<u32>;
}
