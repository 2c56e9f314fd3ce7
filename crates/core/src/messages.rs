//! User-facing messages surfaced at the web boundary.
//!
//! The API speaks Portuguese to its clients; every message that can end up
//! in an error envelope is declared here so handlers, use cases, and tests
//! agree on the exact wording.

pub const FIELD_REQUIRED: &str = "O campo deve estar preenchido";
pub const FIELD_UUID: &str = "O campo deve ser do tipo UUID";
pub const GREATER_THAN_ZERO: &str = "O campo deve ser maior que zero";
pub const INVALID_STATE: &str = "O estado não é válido";
pub const INVALID_CUISINE: &str = "O tipo de cozinha não é válido";
pub const INVALID_DAY_OF_WEEK: &str = "O dia da semana não é válido";
pub const INVALID_TIME: &str = "O campo deve ser um horário válido";
pub const OPENING_BEFORE_CLOSING: &str =
    "O horário de abertura deve ser anterior ao horário de fechamento";

pub const DUPLICATE_NAME: &str = "Nome já cadastrado!";
pub const RESTAURANT_NOT_FOUND: &str = "Restaurante(s) não existe!";
pub const RESERVATION_NOT_FOUND: &str = "Reserva(s) não existe!";

pub const INTERNAL_ERROR: &str = "Erro interno no servidor";

/// Length-range message for string fields, counted in characters.
pub fn length_between(min: usize, max: usize) -> String {
    format!("O campo deve ter entre {min} e {max} caracteres")
}

/// Maximum-length message for optional string fields.
pub fn length_at_most(max: usize) -> String {
    format!("O campo deve ter no máximo {max} caracteres")
}
