//! [`SqliteStore`] — the SQLite implementation of [`AccountStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::{OptionalExtension as _, TransactionBehavior, ffi};
use vanduo_core::{
  customer::{Customer, CustomerLookup, NewCustomer},
  identifier::{Identifier, IdentifierType, NewIdentifier, Registration},
  store::{AccountStore, IdentifierIndex},
};

use crate::{
  Result,
  encode::{
    CUSTOMER_COLUMNS, IDENTIFIER_COLUMNS, RawCustomer, RawIdentifier,
    encode_dt, encode_identifier_type,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An account store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

/// What happened to an identifier `INSERT`, decided on the connection thread.
enum InsertOutcome {
  Inserted(i64),
  Duplicate,
  MissingCustomer,
}

/// Extended SQLite result code of a constraint violation, if `e` is one.
fn constraint_violation(e: &rusqlite::Error) -> Option<i32> {
  match e {
    rusqlite::Error::SqliteFailure(err, _)
      if err.code == rusqlite::ErrorCode::ConstraintViolation =>
    {
      Some(err.extended_code)
    }
    _ => None,
  }
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Delete a customer; its identifiers go with it (`ON DELETE CASCADE`).
  pub async fn delete_customer(&self, id: i64) -> Result<bool> {
    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM customers WHERE id = ?1", [id])?)
      })
      .await?;
    Ok(deleted > 0)
  }
}

// ─── IdentifierIndex impl ────────────────────────────────────────────────────

impl IdentifierIndex for SqliteStore {
  type Error = crate::Error;

  async fn find_owner<'a>(
    &'a self,
    identifier_type: IdentifierType,
    value: &'a str,
  ) -> Result<Option<Customer>> {
    let type_str  = encode_identifier_type(identifier_type);
    let value_str = value.to_owned();

    let raw: Option<RawCustomer> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT c.id, c.name, c.surname, c.personal_code, c.email,
                    c.phone, c.created_at
             FROM identifiers i
             JOIN customers   c ON c.id = i.customer_id
             WHERE i.identifier_type = ?1 AND i.value = ?2",
            rusqlite::params![type_str, value_str],
            RawCustomer::from_row,
          )
          .optional()?)
      })
      .await?;

    tracing::debug!(
      %identifier_type,
      value,
      found = raw.is_some(),
      "identifier lookup"
    );
    raw.map(RawCustomer::into_customer).transpose()
  }

  async fn register(&self, input: NewIdentifier) -> Result<Registration> {
    let customer_id     = input.customer_id();
    let identifier_type = input.identifier_type();
    let value           = input.value().to_owned();
    let created_at      = Utc::now();

    let type_str  = encode_identifier_type(identifier_type);
    let value_str = value.clone();
    let at_str    = encode_dt(created_at);

    let outcome = self
      .conn
      .call(move |conn| {
        // Write lock up front: the customer check and the insert share one
        // snapshot.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let customer_exists = tx
          .query_row(
            "SELECT 1 FROM customers WHERE id = ?1",
            [customer_id],
            |_| Ok(()),
          )
          .optional()?
          .is_some();
        if !customer_exists {
          return Ok(InsertOutcome::MissingCustomer);
        }

        let inserted = tx.execute(
          "INSERT INTO identifiers (customer_id, identifier_type, value, created_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![customer_id, type_str, value_str, at_str],
        );

        let outcome = match inserted {
          Ok(_) => InsertOutcome::Inserted(tx.last_insert_rowid()),
          Err(e) => match constraint_violation(&e) {
            Some(ffi::SQLITE_CONSTRAINT_UNIQUE) => InsertOutcome::Duplicate,
            Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => {
              InsertOutcome::MissingCustomer
            }
            _ => return Err(e.into()),
          },
        };

        tx.commit()?;
        Ok(outcome)
      })
      .await?;

    Ok(match outcome {
      InsertOutcome::Inserted(id) => {
        tracing::info!(
          id,
          customer_id,
          %identifier_type,
          %value,
          "identifier registered"
        );
        Registration::Created(Identifier {
          id,
          customer_id,
          identifier_type,
          value,
          created_at,
        })
      }
      InsertOutcome::Duplicate => {
        tracing::info!(%identifier_type, %value, "identifier already registered");
        Registration::Conflict { identifier_type, value }
      }
      InsertOutcome::MissingCustomer => {
        tracing::info!(customer_id, "identifier for unknown customer");
        Registration::UnknownCustomer(customer_id)
      }
    })
  }
}

// ─── AccountStore impl ───────────────────────────────────────────────────────

impl AccountStore for SqliteStore {
  // ── Customers ─────────────────────────────────────────────────────────────

  async fn add_customer(&self, input: NewCustomer) -> Result<Customer> {
    let created_at = Utc::now();
    let at_str     = encode_dt(created_at);
    let row        = input.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO customers (name, surname, personal_code, email, phone, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            row.name,
            row.surname,
            row.personal_code,
            row.email,
            row.phone,
            at_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Customer {
      id,
      name: input.name,
      surname: input.surname,
      personal_code: input.personal_code,
      email: input.email,
      phone: input.phone,
      created_at,
    })
  }

  async fn get_customer(&self, id: i64) -> Result<Option<Customer>> {
    let raw: Option<RawCustomer> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = ?1"),
            [id],
            RawCustomer::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawCustomer::into_customer).transpose()
  }

  async fn find_customers(&self, lookup: CustomerLookup) -> Result<Vec<Customer>> {
    let (column, needle) = match lookup {
      CustomerLookup::PersonalCode(v) => ("personal_code", v),
      CustomerLookup::Email(v) => ("email", v),
      CustomerLookup::Surname(v) => ("surname", v),
      CustomerLookup::Phone(v) => ("phone", v),
    };
    tracing::debug!(column, "customer lookup");

    let raws: Vec<RawCustomer> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE {column} = ?1 ORDER BY id"
        ))?;
        let rows = stmt
          .query_map([needle], RawCustomer::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCustomer::into_customer).collect()
  }

  // ── Identifiers ───────────────────────────────────────────────────────────

  async fn get_identifier(&self, id: i64) -> Result<Option<Identifier>> {
    let raw: Option<RawIdentifier> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {IDENTIFIER_COLUMNS} FROM identifiers WHERE id = ?1"),
            [id],
            RawIdentifier::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawIdentifier::into_identifier).transpose()
  }

  async fn list_identifiers(
    &self,
    customer_id: Option<i64>,
  ) -> Result<Vec<Identifier>> {
    let raws: Vec<RawIdentifier> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {IDENTIFIER_COLUMNS} FROM identifiers
           WHERE ?1 IS NULL OR customer_id = ?1
           ORDER BY id DESC"
        ))?;
        let rows = stmt
          .query_map([customer_id], RawIdentifier::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawIdentifier::into_identifier).collect()
  }

  async fn delete_identifier(&self, id: i64) -> Result<bool> {
    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM identifiers WHERE id = ?1", [id])?)
      })
      .await?;

    if deleted > 0 {
      tracing::info!(id, "identifier deleted");
    }
    Ok(deleted > 0)
  }
}
