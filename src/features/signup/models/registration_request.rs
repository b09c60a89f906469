/// Sign-up input as handed to the controller. Absent wire fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegistrationRequest {
    /// Required fields in the order they are checked for presence
    pub fn required_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
            ("passwordConfirmation", &self.password_confirmation),
        ]
    }
}
