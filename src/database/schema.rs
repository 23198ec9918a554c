//! Sincronización del schema
//!
//! El schema se deriva de las declaraciones de entidades y se sincroniza
//! al arrancar con DDL idempotente, sin archivos de migración.

use sqlx::PgPool;

use crate::utils::errors::AppResult;

/// Sentencias DDL, en orden de dependencias (catálogos primero).
const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS makes (
        id SERIAL PRIMARY KEY,
        name VARCHAR(120) NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS insurers (
        id SERIAL PRIMARY KEY,
        name VARCHAR(120) NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS communication_companies (
        id SERIAL PRIMARY KEY,
        name VARCHAR(120) NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS eps (
        id SERIAL PRIMARY KEY,
        name VARCHAR(120) NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS arl (
        id SERIAL PRIMARY KEY,
        name VARCHAR(120) NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS companies (
        id SERIAL PRIMARY KEY,
        nit VARCHAR(30) NOT NULL UNIQUE,
        name VARCHAR(200) NOT NULL,
        phone VARCHAR(20),
        address VARCHAR(200)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS owners (
        id SERIAL PRIMARY KEY,
        name VARCHAR(120) NOT NULL,
        identification VARCHAR(30) NOT NULL UNIQUE,
        email VARCHAR(120),
        address VARCHAR(200),
        phone VARCHAR(20) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS drivers (
        id SERIAL PRIMARY KEY,
        identification VARCHAR(30) NOT NULL UNIQUE,
        issued_in VARCHAR(120) NOT NULL,
        first_name VARCHAR(120) NOT NULL,
        last_name VARCHAR(120) NOT NULL,
        phone VARCHAR(20) NOT NULL,
        address VARCHAR(200) NOT NULL,
        license VARCHAR(60) NOT NULL,
        category VARCHAR(10) NOT NULL,
        expires_on DATE NOT NULL,
        blood_type VARCHAR(10) NOT NULL,
        photo VARCHAR(500) NOT NULL,
        eps_id INTEGER NOT NULL REFERENCES eps(id),
        arl_id INTEGER NOT NULL REFERENCES arl(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS vehicles (
        id SERIAL PRIMARY KEY,
        plate VARCHAR(15) NOT NULL UNIQUE,
        model VARCHAR(60) NOT NULL,
        internal_number VARCHAR(30),
        mobile_number VARCHAR(20),
        make_id INTEGER NOT NULL REFERENCES makes(id),
        insurer_id INTEGER REFERENCES insurers(id),
        communication_company_id INTEGER REFERENCES communication_companies(id),
        owner_id INTEGER REFERENCES owners(id),
        company_id INTEGER REFERENCES companies(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS drivers_vehicles (
        id SERIAL PRIMARY KEY,
        driver_id INTEGER NOT NULL REFERENCES drivers(id) ON DELETE CASCADE,
        vehicle_id INTEGER NOT NULL REFERENCES vehicles(id) ON DELETE CASCADE,
        permit_expires_on DATE,
        note VARCHAR(500),
        soat VARCHAR(60),
        soat_expires_on DATE,
        operation_card VARCHAR(60),
        operation_card_expires_on DATE,
        contractual_expires_on DATE,
        extra_contractual_expires_on DATE,
        technical_mechanic_expires_on DATE,
        UNIQUE (driver_id, vehicle_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS administrations (
        id SERIAL PRIMARY KEY,
        date DATE NOT NULL,
        value INTEGER NOT NULL,
        detail TEXT NOT NULL,
        payer VARCHAR(120) NOT NULL,
        vehicle_id INTEGER NOT NULL REFERENCES vehicles(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        "user" VARCHAR(120) NOT NULL UNIQUE,
        password VARCHAR(200) NOT NULL,
        permissions VARCHAR(60) NOT NULL,
        name VARCHAR(120) NOT NULL,
        company_id INTEGER REFERENCES companies(id)
    )
    "#,
];

/// Ejecutar la sincronización del schema
pub async fn sync(pool: &PgPool) -> AppResult<()> {
    for statement in DDL {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::info!("✅ Schema sincronizado ({} tablas)", DDL.len());
    Ok(())
}
