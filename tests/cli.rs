use assert_cmd::prelude::*;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use mockito::Matcher;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

/// Unsigned token with the given `exp` claim.
fn token_expiring_at(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"admin@admin","exp":{exp}}}"#));
    format!("{header}.{claims}.c2ln")
}

fn valid_token() -> String {
    token_expiring_at(Utc::now().timestamp() + 3600)
}

fn expired_token() -> String {
    token_expiring_at(Utc::now().timestamp() - 60)
}

fn config_path(dir: &Path) -> PathBuf {
    dir.join("config.yaml")
}

fn token_path(dir: &Path) -> PathBuf {
    dir.join("token")
}

fn write_config(dir: &Path, api_url: &str) -> PathBuf {
    let path = config_path(dir);
    fs::write(&path, format!("api_url: {api_url}\ntimeout_secs: 5\n"))
        .expect("failed to write config");
    path
}

fn write_token(dir: &Path, token: &str) {
    fs::write(token_path(dir), token).expect("failed to write token");
}

/// Command with an isolated environment and the given config file.
fn inventario(config: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("inventario"));
    cmd.arg("--config")
        .arg(config)
        .env_remove("INVENTARIO_CONFIG")
        .env_remove("INVENTARIO_API_URL")
        .env_remove("INVENTARIO_FORMAT")
        .env_remove("INVENTARIO_DEBUG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn status_without_session_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = config_path(temp.path());

    let assert = inventario(&config).arg("status").assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("Not signed in"));
    assert!(stdout.contains(&config.to_string_lossy().to_string()));

    Ok(())
}

#[test]
fn status_reports_active_and_expired_sessions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "http://127.0.0.1:9/api/v1");

    write_token(temp.path(), &valid_token());
    inventario(&config)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in"));

    write_token(temp.path(), &expired_token());
    inventario(&config)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session expired"));

    // status only reports; it does not clear
    assert!(token_path(temp.path()).exists());

    Ok(())
}

#[test]
fn logout_removes_token_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "http://127.0.0.1:9/api/v1");
    write_token(temp.path(), &valid_token());

    inventario(&config)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));
    assert!(!token_path(temp.path()).exists());

    // second logout is a no-op
    inventario(&config)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("No active session"));

    Ok(())
}

#[test]
fn protected_command_without_session_asks_to_sign_in() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "http://127.0.0.1:9/api/v1");

    inventario(&config)
        .args(["product", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "inventario login --return-to /productos",
        ));

    Ok(())
}

#[test]
fn expired_token_is_cleared_by_guard() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "http://127.0.0.1:9/api/v1");
    write_token(temp.path(), &expired_token());

    inventario(&config)
        .args(["category", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--return-to /categorias"));

    assert!(!token_path(temp.path()).exists());

    Ok(())
}

#[test]
fn login_then_list_categories() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_url = format!("{}/api/v1", server.url());
    let token = valid_token();

    let login = server
        .mock("POST", "/api/v1/auth/login")
        .match_body(Matcher::Json(serde_json::json!({
            "correo": "admin@admin",
            "contrasena": "123456"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"isSuccess": true, "message": "Bienvenido", "data": "Bearer {token}"}}"#
        ))
        .create();

    let categories = server
        .mock("GET", "/api/v1/admin/categorias")
        .match_header("authorization", format!("Bearer {token}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"idCategoria": 1, "nombre": "Herramientas", "activo": true},
                {"idCategoria": 2, "nombre": "Pinturas", "activo": false}
            ]"#,
        )
        .create();

    let temp = tempdir()?;
    let config = config_path(temp.path());

    inventario(&config)
        .args(["login", "--email", " admin@admin ", "--password", "123456"])
        .args(["--api-url", &api_url, "--return-to", "/categorias"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in"))
        .stdout(predicate::str::contains("inventario open /categorias"));

    // stored without the scheme prefix
    assert_eq!(fs::read_to_string(token_path(temp.path()))?, token);
    // the address used to sign in is remembered
    assert!(fs::read_to_string(&config)?.contains(&api_url));

    let assert = inventario(&config)
        .args(["category", "list", "--search", "herr", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    let rows = value["data"].as_array().expect("data array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Herramientas");

    login.assert();
    categories.assert();

    Ok(())
}

#[test]
fn failed_login_keeps_previous_token() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_url = format!("{}/api/v1", server.url());

    let _login = server
        .mock("POST", "/api/v1/auth/login")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"isSuccess": false, "message": "Credenciales inválidas"}"#)
        .create();

    let temp = tempdir()?;
    let config = write_config(temp.path(), &api_url);
    write_token(temp.path(), "previous-token");

    inventario(&config)
        .args(["login", "--email", "admin@admin", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Sign-in failed: Credenciales inválidas",
        ));

    assert_eq!(
        fs::read_to_string(token_path(temp.path()))?,
        "previous-token"
    );

    Ok(())
}

#[test]
fn unauthorized_response_ends_session() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_url = format!("{}/api/v1", server.url());

    let _products = server
        .mock("GET", "/api/v1/admin/productos")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("")
        .create();
    let _categories = server
        .mock("GET", "/api/v1/admin/categorias")
        .with_status(401)
        .with_body("")
        .create();

    let temp = tempdir()?;
    let config = write_config(temp.path(), &api_url);
    write_token(temp.path(), &valid_token());

    inventario(&config)
        .args(["product", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session ended"))
        .stderr(predicate::str::contains("Not authorized"));

    assert!(!token_path(temp.path()).exists());

    Ok(())
}

#[test]
fn product_list_names_categories() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_url = format!("{}/api/v1", server.url());

    let _categories = server
        .mock("GET", "/api/v1/admin/categorias")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"idCategoria": 3, "nombre": "Herramientas", "activo": true}]"#)
        .create();
    let _products = server
        .mock("GET", "/api/v1/admin/productos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"idProducto": 1, "nombre": "Martillo", "idCategoria": 3, "activo": true},
                {"idProducto": 2, "nombre": "Clavos", "idCategoria": 8, "activo": true},
                {"idProducto": 3, "nombre": "Cinta", "activo": true}
            ]"#,
        )
        .create();

    let temp = tempdir()?;
    let config = write_config(temp.path(), &api_url);
    write_token(temp.path(), &valid_token());

    let assert = inventario(&config)
        .args(["product", "list", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    let categories: Vec<&str> = value["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|row| row["category"].as_str())
        .collect();
    assert_eq!(categories, vec!["Herramientas", "#8", "-"]);

    Ok(())
}

#[test]
fn movement_list_rejects_non_positive_ids() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = config_path(temp.path());

    inventario(&config)
        .args(["movement", "list", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid offer ID 0"));

    Ok(())
}

#[test]
fn completion_prints_script() {
    Command::new(assert_cmd::cargo::cargo_bin!("inventario"))
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inventario"));
}
