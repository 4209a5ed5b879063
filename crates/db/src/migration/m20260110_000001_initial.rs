//! Initial database migration.
//!
//! Creates the enums, tables, and indexes for the ledger and filing core.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: CHART OF ACCOUNTS
        // ============================================================
        db.execute_unprepared(ACCOUNTS_SQL).await?;

        // ============================================================
        // PART 3: FISCAL PERIOD MANAGEMENT
        // ============================================================
        db.execute_unprepared(FISCAL_YEARS_SQL).await?;
        db.execute_unprepared(FISCAL_PERIODS_SQL).await?;

        // ============================================================
        // PART 4: JOURNAL ENTRIES & LINES
        // ============================================================
        db.execute_unprepared(JOURNAL_ENTRIES_SQL).await?;
        db.execute_unprepared(JOURNAL_LINES_SQL).await?;
        db.execute_unprepared(ENTRY_COUNTERS_SQL).await?;

        // ============================================================
        // PART 5: TAX FILINGS
        // ============================================================
        db.execute_unprepared(TAX_FILINGS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Account types
CREATE TYPE account_type AS ENUM (
    'asset',
    'liability',
    'equity',
    'revenue',
    'expense'
);

-- Account subtypes
CREATE TYPE account_subtype AS ENUM (
    'cash',
    'bank',
    'accounts_receivable',
    'inventory',
    'prepaid_expense',
    'fixed_asset',
    'other_asset',
    'accounts_payable',
    'tax_payable',
    'social_security_payable',
    'wages_payable',
    'other_liability',
    'owners_equity',
    'retained_earnings',
    'opening_balance_equity',
    'sales_revenue',
    'service_revenue',
    'other_revenue',
    'cost_of_goods_sold',
    'operating_expense',
    'salary_expense',
    'social_security_expense',
    'tax_expense',
    'other_expense'
);

-- Journal entry source
CREATE TYPE entry_source AS ENUM (
    'manual',
    'invoice',
    'payroll',
    'opening',
    'reversal'
);

-- Journal entry status
CREATE TYPE entry_status AS ENUM ('draft', 'posted', 'void');

-- Fiscal year status
CREATE TYPE fiscal_year_status AS ENUM ('open', 'closed');

-- Fiscal period status
CREATE TYPE fiscal_period_status AS ENUM ('open', 'closed', 'locked');

-- Tax filing type
CREATE TYPE filing_type AS ENUM ('monthly_wit', 'annual_wit', 'inss_monthly');

-- Tax filing status
CREATE TYPE filing_status AS ENUM ('pending', 'overdue', 'filed');
";

const ACCOUNTS_SQL: &str = r"
CREATE TABLE accounts (
    id UUID PRIMARY KEY,
    tenant_id UUID NOT NULL,
    code VARCHAR(20) NOT NULL,
    name VARCHAR(255) NOT NULL,
    account_type account_type NOT NULL,
    sub_type account_subtype NOT NULL,
    parent_code VARCHAR(20),
    level SMALLINT NOT NULL DEFAULT 1,
    is_system BOOLEAN NOT NULL DEFAULT FALSE,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

    CONSTRAINT uq_accounts_tenant_code UNIQUE (tenant_id, code)
);

CREATE INDEX idx_accounts_tenant ON accounts (tenant_id);
CREATE INDEX idx_accounts_tenant_type ON accounts (tenant_id, account_type);
";

const FISCAL_YEARS_SQL: &str = r"
CREATE TABLE fiscal_years (
    id UUID PRIMARY KEY,
    tenant_id UUID NOT NULL,
    year INTEGER NOT NULL,
    status fiscal_year_status NOT NULL DEFAULT 'open',
    opening_balances_posted BOOLEAN NOT NULL DEFAULT FALSE,
    opening_balance_entry_id UUID,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

    CONSTRAINT uq_fiscal_years_tenant_year UNIQUE (tenant_id, year)
);

CREATE INDEX idx_fiscal_years_tenant ON fiscal_years (tenant_id);
";

const FISCAL_PERIODS_SQL: &str = r"
CREATE TABLE fiscal_periods (
    id UUID PRIMARY KEY,
    tenant_id UUID NOT NULL,
    fiscal_year_id UUID NOT NULL REFERENCES fiscal_years (id) ON DELETE CASCADE,
    period_number SMALLINT NOT NULL,
    start_date DATE NOT NULL,
    end_date DATE NOT NULL,
    status fiscal_period_status NOT NULL DEFAULT 'open',
    closed_by UUID,
    closed_at TIMESTAMPTZ,
    locked_by UUID,
    locked_at TIMESTAMPTZ,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

    CONSTRAINT uq_fiscal_periods_year_number UNIQUE (fiscal_year_id, period_number),
    CONSTRAINT chk_fiscal_periods_dates CHECK (start_date <= end_date)
);

CREATE INDEX idx_fiscal_periods_tenant ON fiscal_periods (tenant_id);
CREATE INDEX idx_fiscal_periods_tenant_dates ON fiscal_periods (tenant_id, start_date, end_date);
";

const JOURNAL_ENTRIES_SQL: &str = r"
CREATE TABLE journal_entries (
    id UUID PRIMARY KEY,
    tenant_id UUID NOT NULL,
    entry_number BIGINT NOT NULL,
    entry_date DATE NOT NULL,
    description TEXT NOT NULL,
    source entry_source NOT NULL DEFAULT 'manual',
    status entry_status NOT NULL DEFAULT 'draft',
    reversal_entry_id UUID REFERENCES journal_entries (id),
    total_debit NUMERIC(19, 4) NOT NULL DEFAULT 0,
    total_credit NUMERIC(19, 4) NOT NULL DEFAULT 0,
    fiscal_year_id UUID NOT NULL REFERENCES fiscal_years (id),
    fiscal_year INTEGER NOT NULL,
    fiscal_period_id UUID NOT NULL REFERENCES fiscal_periods (id),
    created_by UUID NOT NULL,
    posted_by UUID,
    posted_at TIMESTAMPTZ,
    voided_by UUID,
    voided_at TIMESTAMPTZ,
    void_reason TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

    CONSTRAINT uq_journal_entries_number UNIQUE (tenant_id, fiscal_year, entry_number),
    CONSTRAINT chk_journal_entries_totals CHECK (total_debit >= 0 AND total_credit >= 0)
);

CREATE INDEX idx_journal_entries_tenant_date ON journal_entries (tenant_id, entry_date);
CREATE INDEX idx_journal_entries_tenant_status ON journal_entries (tenant_id, status);
CREATE INDEX idx_journal_entries_period ON journal_entries (fiscal_period_id);
";

const JOURNAL_LINES_SQL: &str = r"
CREATE TABLE journal_lines (
    id UUID PRIMARY KEY,
    entry_id UUID NOT NULL REFERENCES journal_entries (id) ON DELETE CASCADE,
    line_number SMALLINT NOT NULL,
    account_id UUID NOT NULL REFERENCES accounts (id),
    account_code VARCHAR(20) NOT NULL,
    account_name VARCHAR(255) NOT NULL,
    debit NUMERIC(19, 4) NOT NULL DEFAULT 0,
    credit NUMERIC(19, 4) NOT NULL DEFAULT 0,
    memo TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

    CONSTRAINT uq_journal_lines_entry_number UNIQUE (entry_id, line_number),
    CONSTRAINT chk_journal_lines_one_sided CHECK (
        (debit > 0 AND credit = 0) OR (credit > 0 AND debit = 0)
    )
);

CREATE INDEX idx_journal_lines_entry ON journal_lines (entry_id);
CREATE INDEX idx_journal_lines_account ON journal_lines (account_id);
";

const ENTRY_COUNTERS_SQL: &str = r"
CREATE TABLE entry_counters (
    tenant_id UUID NOT NULL,
    fiscal_year INTEGER NOT NULL,
    last_number BIGINT NOT NULL DEFAULT 0,

    PRIMARY KEY (tenant_id, fiscal_year)
);
";

const TAX_FILINGS_SQL: &str = r"
CREATE TABLE tax_filings (
    id UUID PRIMARY KEY,
    tenant_id UUID NOT NULL,
    filing_type filing_type NOT NULL,
    period VARCHAR(7) NOT NULL,
    status filing_status NOT NULL DEFAULT 'pending',
    due_date DATE NOT NULL,
    data_snapshot JSONB NOT NULL DEFAULT '{}',
    total_wages NUMERIC(19, 4) NOT NULL DEFAULT 0,
    wit_withheld NUMERIC(19, 4) NOT NULL DEFAULT 0,
    inss_employee NUMERIC(19, 4) NOT NULL DEFAULT 0,
    inss_employer NUMERIC(19, 4) NOT NULL DEFAULT 0,
    filed_date DATE,
    submission_method VARCHAR(50),
    receipt_number VARCHAR(100),
    notes TEXT,
    updated_by UUID NOT NULL,
    filed_by UUID,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

    CONSTRAINT uq_tax_filings_key UNIQUE (tenant_id, filing_type, period)
);

CREATE INDEX idx_tax_filings_tenant_status ON tax_filings (tenant_id, status);
CREATE INDEX idx_tax_filings_tenant_due ON tax_filings (tenant_id, due_date);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS tax_filings CASCADE;
DROP TABLE IF EXISTS entry_counters CASCADE;
DROP TABLE IF EXISTS journal_lines CASCADE;
DROP TABLE IF EXISTS journal_entries CASCADE;
DROP TABLE IF EXISTS fiscal_periods CASCADE;
DROP TABLE IF EXISTS fiscal_years CASCADE;
DROP TABLE IF EXISTS accounts CASCADE;

DROP TYPE IF EXISTS filing_status;
DROP TYPE IF EXISTS filing_type;
DROP TYPE IF EXISTS fiscal_period_status;
DROP TYPE IF EXISTS fiscal_year_status;
DROP TYPE IF EXISTS entry_status;
DROP TYPE IF EXISTS entry_source;
DROP TYPE IF EXISTS account_subtype;
DROP TYPE IF EXISTS account_type;
";
