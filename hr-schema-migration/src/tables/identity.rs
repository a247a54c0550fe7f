use super::active;
use crate::schema::{Field, OnDelete::Cascade, TableDef};

pub fn tables() -> Vec<TableDef> {
    vec![
        TableDef::global("permissions")
            .field(Field::string("code", 128))
            .field(Field::string("module", 64))
            .field(Field::text("description").null())
            .unique(&["code"]),
        TableDef::entity("roles")
            .field(Field::string("name", 100))
            .field(Field::text("description").null())
            .field(Field::flag("is_system"))
            .unique(&["organization_id", "name"]),
        TableDef::record("role_permissions")
            .belongs_to("role_id", "roles", Cascade)
            .belongs_to("permission_id", "permissions", Cascade)
            .unique(&["role_id", "permission_id"]),
        TableDef::entity("users")
            .field(Field::string("email", 256))
            .field(Field::string("normalized_email", 256))
            .field(Field::string("user_name", 128))
            .field(Field::text("password_hash").null())
            .field(Field::string("security_stamp", 64).null())
            .field(Field::string("phone", 32).null())
            .field(Field::flag("email_confirmed"))
            .field(Field::flag("two_factor_enabled"))
            .field(Field::timestamp("lockout_end").null())
            .field(Field::integer("access_failed_count").default_int(0))
            .field(Field::timestamp("last_login_at").null())
            .field(Field::string("preferred_locale", 16).null())
            .field(active())
            .refers_to("employee_id", "employees")
            .unique(&["organization_id", "normalized_email"])
            .unique(&["organization_id", "user_name"]),
        TableDef::record("user_roles")
            .belongs_to("user_id", "users", Cascade)
            .belongs_to("role_id", "roles", Cascade)
            .unique(&["user_id", "role_id"]),
        TableDef::record("user_sessions")
            .belongs_to("user_id", "users", Cascade)
            .field(Field::string("ip_address", 64).null())
            .field(Field::string("user_agent", 512).null())
            .field(Field::timestamp("started_at").default_now())
            .field(Field::timestamp("expires_at"))
            .field(Field::timestamp("revoked_at").null())
            .index(&["user_id", "expires_at"]),
        TableDef::record("refresh_tokens")
            .belongs_to("user_id", "users", Cascade)
            .field(Field::string("token_hash", 128))
            .field(Field::timestamp("expires_at"))
            .field(Field::timestamp("revoked_at").null())
            .field(Field::string("replaced_by_token_hash", 128).null())
            .unique(&["token_hash"]),
        TableDef::record("password_reset_tokens")
            .belongs_to("user_id", "users", Cascade)
            .field(Field::string("token_hash", 128))
            .field(Field::timestamp("expires_at"))
            .field(Field::timestamp("used_at").null())
            .unique(&["token_hash"]),
        TableDef::entity("api_keys")
            .field(Field::string("name", 100))
            .field(Field::string("key_prefix", 16))
            .field(Field::string("key_hash", 128))
            .field(Field::json("scopes"))
            .field(Field::timestamp("expires_at").null())
            .field(Field::timestamp("last_used_at").null())
            .refers_to("owner_user_id", "users")
            .unique(&["key_hash"]),
        TableDef::record("login_attempts")
            .field(Field::string("user_name", 256))
            .field(Field::flag("succeeded"))
            .field(Field::string("ip_address", 64).null())
            .field(Field::string("user_agent", 512).null())
            .field(Field::string("failure_reason", 128).null())
            .refers_to("user_id", "users")
            .index(&["user_name", "created_at"]),
    ]
}
