//! Ordered schema migration steps
//!
//! Append new steps with the next version number; never edit or reorder
//! released ones. Every step must be safe to run against a database where it
//! already ran.

use super::{Feature, Migration, Step};

/// Every schema step, in ascending version order
pub const MIGRATIONS: &[Migration] = &[
    // =========================================================================
    // Bump counters, reminders, settings
    // =========================================================================
    Migration {
        version: 1,
        feature: Feature::Bump,
        description: "create users",
        step: Step::Sql(
            r"
            CREATE TABLE IF NOT EXISTS users (
                user_id BIGINT PRIMARY KEY,
                bump_count INTEGER NOT NULL DEFAULT 0
            )
            ",
        ),
    },
    Migration {
        version: 2,
        feature: Feature::Bump,
        description: "create reminders",
        step: Step::Sql(
            r"
            CREATE TABLE IF NOT EXISTS reminders (
                id SERIAL PRIMARY KEY,
                channel_id BIGINT NOT NULL,
                remind_at TIMESTAMP WITH TIME ZONE NOT NULL,
                status TEXT NOT NULL DEFAULT 'waiting'
            )
            ",
        ),
    },
    Migration {
        version: 3,
        feature: Feature::Bump,
        description: "create settings",
        step: Step::Sql(
            r"
            CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT
            )
            ",
        ),
    },
    Migration {
        version: 4,
        feature: Feature::Bump,
        description: "seed scan_completed",
        step: Step::Sql(
            r"
            INSERT INTO settings (key, value) VALUES ('scan_completed', 'false')
            ON CONFLICT (key) DO NOTHING
            ",
        ),
    },
    // =========================================================================
    // Introductions
    // =========================================================================
    Migration {
        version: 5,
        feature: Feature::Introductions,
        description: "create introductions",
        step: Step::Sql(
            r"
            CREATE TABLE IF NOT EXISTS introductions (
                user_id BIGINT PRIMARY KEY,
                channel_id BIGINT NOT NULL,
                message_id BIGINT NOT NULL,
                created_at TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP
            )
            ",
        ),
    },
    Migration {
        version: 6,
        feature: Feature::Introductions,
        description: "add introductions.created_at to legacy tables",
        step: Step::AddColumnIfMissing {
            table: "introductions",
            column: "created_at",
            definition: "TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP",
        },
    },
    Migration {
        version: 7,
        feature: Feature::Introductions,
        description: "index introductions by user",
        step: Step::Sql(
            r"
            CREATE INDEX IF NOT EXISTS idx_introductions_user_id ON introductions(user_id)
            ",
        ),
    },
    // =========================================================================
    // Moderation reports
    // =========================================================================
    Migration {
        version: 8,
        feature: Feature::Moderation,
        description: "create reports",
        step: Step::Sql(
            r"
            CREATE TABLE IF NOT EXISTS reports (
                report_id SERIAL PRIMARY KEY,
                guild_id BIGINT,
                message_id BIGINT,
                target_user_id BIGINT,
                violated_rule TEXT,
                details TEXT,
                message_link TEXT,
                urgency TEXT,
                status TEXT DEFAULT '未対応',
                created_at TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP
            )
            ",
        ),
    },
    Migration {
        version: 9,
        feature: Feature::Moderation,
        description: "create guild_settings",
        step: Step::Sql(
            r"
            CREATE TABLE IF NOT EXISTS guild_settings (
                guild_id BIGINT PRIMARY KEY,
                report_channel_id BIGINT,
                urgent_role_id BIGINT
            )
            ",
        ),
    },
    Migration {
        version: 10,
        feature: Feature::Moderation,
        description: "create report_cooldowns",
        step: Step::Sql(
            r"
            CREATE TABLE IF NOT EXISTS report_cooldowns (
                user_id BIGINT PRIMARY KEY,
                last_report_at TIMESTAMP WITH TIME ZONE NOT NULL
            )
            ",
        ),
    },
];
