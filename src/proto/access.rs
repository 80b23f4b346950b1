//! Records of the `access.Security` service.

/// Login request sent to `access.Security/RunLogin`.
///
/// Either `user_name` + `user_pass` or `token` is meaningful; the other
/// pair is left empty.
#[derive(Clone, PartialEq, prost::Message)]
pub struct LoginRequest {
    #[prost(string, tag = "1")]
    pub user_name: String,
    #[prost(string, tag = "2")]
    pub user_pass: String,
    #[prost(string, tag = "3")]
    pub token: String,
    #[prost(string, tag = "4")]
    pub role_uuid: String,
    #[prost(string, tag = "5")]
    pub organization_uuid: String,
    #[prost(string, tag = "6")]
    pub warehouse_uuid: String,
    #[prost(string, tag = "7")]
    pub language: String,
    #[prost(string, tag = "8")]
    pub client_version: String,
}

/// Session returned by a successful login.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Session {
    #[prost(int32, tag = "1")]
    pub id: i32,
    /// Session identifier used to build client contexts.
    #[prost(string, tag = "2")]
    pub uuid: String,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(string, tag = "4")]
    pub user_name: String,
    #[prost(string, tag = "5")]
    pub role_uuid: String,
    #[prost(string, tag = "6")]
    pub organization_uuid: String,
    #[prost(string, tag = "7")]
    pub warehouse_uuid: String,
    #[prost(string, tag = "8")]
    pub language: String,
}
