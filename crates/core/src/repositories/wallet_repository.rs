use chrono::Utc;
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::wallet::{NewWallet, Wallet};
use clubvest_primitives::schema::wallets;
use diesel::prelude::*;
use uuid::Uuid;

pub struct WalletRepository;

impl WalletRepository {
    pub fn find_by_user(conn: &mut PgConnection, user_id: Uuid) -> Result<Wallet, ApiError> {
        wallets::table
            .filter(wallets::user_id.eq(user_id))
            .first::<Wallet>(conn)
            .map_err(|e| {
                if matches!(e, diesel::result::Error::NotFound) {
                    ApiError::NotFound("Wallet not found".into())
                } else {
                    ApiError::from(e)
                }
            })
    }

    pub fn find_by_user_with_lock(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Wallet, ApiError> {
        wallets::table
            .filter(wallets::user_id.eq(user_id))
            .for_update()
            .first::<Wallet>(conn)
            .map_err(|e| {
                if matches!(e, diesel::result::Error::NotFound) {
                    ApiError::NotFound("Wallet not found".into())
                } else {
                    ApiError::from(e)
                }
            })
    }

    /// Atomic conditional balance adjustment. A debit that would take the
    /// balance below zero matches no row and leaves the wallet untouched.
    pub fn adjust_balance(
        conn: &mut PgConnection,
        user_id: Uuid,
        delta: i64,
    ) -> Result<Option<i64>, ApiError> {
        diesel::update(wallets::table)
            .filter(wallets::user_id.eq(user_id))
            .filter(wallets::balance.ge(-delta))
            .set((
                wallets::balance.eq(wallets::balance + delta),
                wallets::updated_at.eq(Utc::now()),
            ))
            .returning(wallets::balance)
            .get_result::<i64>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    /// Unconditional overwrite; only the reconciliation path may use this,
    /// with the wallet row locked.
    pub fn overwrite_balance(
        conn: &mut PgConnection,
        wallet_id: Uuid,
        balance: i64,
    ) -> Result<(), ApiError> {
        diesel::update(wallets::table.find(wallet_id))
            .set((
                wallets::balance.eq(balance),
                wallets::updated_at.eq(Utc::now()),
            ))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(())
    }

    pub fn create_if_not_exists(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Wallet, ApiError> {
        diesel::insert_into(wallets::table)
            .values(&NewWallet { user_id })
            .on_conflict(wallets::user_id)
            .do_nothing()
            .execute(conn)
            .map_err(ApiError::from)?;

        Self::find_by_user(conn, user_id)
    }
}
