use serde::{Deserialize, Serialize};

use speedorz_core::{ClientId, Entity, UserId};

/// A dealership client (the buyer on a purchase order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "idCliente")]
    pub id: ClientId,
    #[serde(rename = "nombreLegal", default)]
    pub legal_name: String,
    #[serde(rename = "numeroIdentificacion", default)]
    pub identification_number: String,
    #[serde(rename = "direccion", default)]
    pub address: String,
    #[serde(rename = "telefono", default)]
    pub phone: String,
}

/// A back-office user.
///
/// The backend also sends the password hash on this resource; it is never
/// deserialized here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "idUsuario")]
    pub id: UserId,
    #[serde(rename = "nombreUsuario", default)]
    pub username: String,
    #[serde(rename = "nombreCompleto", default)]
    pub full_name: String,
    #[serde(rename = "cedula", default)]
    pub national_id: String,
    #[serde(rename = "direccion", default)]
    pub address: String,
    #[serde(rename = "telefono", default)]
    pub phone: String,
    #[serde(rename = "rol", default)]
    pub role: String,
    #[serde(rename = "estado", default)]
    pub status: String,
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> &ClientId {
        &self.id
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}
