//! Wire DTOs exchanged with the REST backend.
//!
//! Field names follow the backend's camelCase JSON; the structs stay
//! snake_case via `rename_all`. Optional fields default so a sparse
//! payload (e.g. the Spring `Page` envelope) still deserializes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// ---- auth ----

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
}

// ---- hospitais ----

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: Option<i64>,
    pub nome: String,
    pub cnpj: String,
    #[serde(default)]
    pub endereco: Option<String>,
    pub telefone1: String,
    #[serde(default)]
    pub telefone2: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalRequest {
    pub nome: String,
    pub cnpj: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    pub telefone1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone2: Option<String>,
}

// ---- especialidades ----

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Especialidade {
    pub id: i64,
    pub nome: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct EspecialidadeRequest {
    pub nome: String,
}

// ---- medicos ----

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medico {
    pub id: i64,
    pub nome_completo: String,
    pub email: String,
    pub crm: String,
    #[serde(default)]
    pub especialidade_id: Option<i64>,
    #[serde(default)]
    pub especialidade_nome: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicoRequest {
    pub nome_completo: String,
    pub crm: String,
    pub especialidade_id: i64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Physician matching an availability search window.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicoDisponivel {
    pub id: i64,
    pub nome_completo: String,
    pub crm: String,
    pub especialidade: String,
}

/// One availability window declared by the physician, ISO-8601 bounds.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct PeriodoDisponibilidade {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub inicio: String,
    pub fim: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct DefinirDisponibilidadeRequest {
    pub periodos: Vec<PeriodoDisponibilidade>,
}

// ---- plantões ----

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plantao {
    pub id: i64,
    #[serde(default)]
    pub hospital_id: Option<i64>,
    #[serde(default)]
    pub nome_hospital: Option<String>,
    #[serde(default)]
    pub medico_id: Option<i64>,
    #[serde(default)]
    pub nome_medico: Option<String>,
    pub especialidade: String,
    pub inicio: String,
    pub fim: String,
    pub valor: f64,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantaoRequest {
    pub hospital_id: i64,
    pub especialidade: String,
    pub inicio: String,
    pub fim: String,
    pub valor: f64,
}

/// Spring-style page envelope; layout fields the UI ignores are dropped.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub size: i64,
    pub number: i64,
    pub number_of_elements: i64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            size: 0,
            number: 0,
            number_of_elements: 0,
            first: true,
            last: true,
            empty: true,
        }
    }
}

// ---- perfil ----

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub crm: Option<String>,
    #[serde(default)]
    pub especialidade_id: Option<i64>,
    #[serde(default)]
    pub especialidade_nome: Option<String>,
    #[serde(default)]
    pub foto_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    pub full_name: String,
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub especialidade_id: Option<i64>,
}

// ---- dashboard ----

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub plantoes_disponiveis: i64,
    pub plantoes_pendentes: i64,
    pub total_medicos: i64,
    pub faturamento_previsto: f64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicoStats {
    pub proximos_plantoes: i64,
    pub candidaturas_pendentes: i64,
    pub pagamentos_pendentes: i64,
}

// ---- notifications ----

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub message: String,
    pub read: bool,
    #[serde(default)]
    pub link: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UnreadCount {
    pub count: i64,
}
