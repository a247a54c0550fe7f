use super::active;
use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        TableDef::entity("notification_templates")
            .field(Field::string("event_key", 128))
            .field(Field::string("channel", 16))
            .field(Field::string("locale", 16).default_str("en"))
            .field(Field::string("subject", 256).null())
            .field(Field::text("body"))
            .field(active())
            .unique(&["organization_id", "event_key", "channel", "locale"]),
        TableDef::record("notifications")
            .belongs_to("recipient_user_id", "users", Cascade)
            .refers_to("notification_template_id", "notification_templates")
            .field(Field::string("event_key", 128))
            .field(Field::string("title", 256))
            .field(Field::text("body").null())
            .field(Field::string("entity_type", 64).null())
            .field(Field::uuid("entity_id").null())
            .field(Field::string("action_url", 1024).null())
            .field(Field::flag("is_read"))
            .field(Field::timestamp("read_at").null())
            .index(&["recipient_user_id", "is_read", "created_at"]),
        TableDef::record("notification_deliveries")
            .belongs_to("notification_id", "notifications", Cascade)
            .field(Field::string("channel", 16))
            .field(Field::string("destination", 512))
            .field(Field::status("status", "Queued"))
            .field(Field::small_integer("attempt_count").default_int(0))
            .field(Field::timestamp("sent_at").null())
            .field(Field::text("error_message").null())
            .field(Field::string("provider_message_id", 256).null())
            .index(&["status", "created_at"]),
        TableDef::record("notification_preferences")
            .belongs_to("user_id", "users", Cascade)
            .field(Field::string("event_key", 128))
            .field(Field::string("channel", 16))
            .field(Field::boolean("is_enabled").default_bool(true))
            .unique(&["user_id", "event_key", "channel"]),
        TableDef::record("push_device_tokens")
            .belongs_to("user_id", "users", Cascade)
            .field(Field::string("platform", 16))
            .field(Field::string("token", 512))
            .field(Field::string("device_name", 200).null())
            .field(Field::timestamp("last_seen_at").null())
            .field(active())
            .unique(&["token"]),
        TableDef::record("notification_digests")
            .belongs_to("user_id", "users", Restrict)
            .field(Field::string("frequency", 16).default_str("Daily"))
            .field(Field::timestamp("last_sent_at").null())
            .field(Field::timestamp("next_run_at").null())
            .unique(&["user_id", "frequency"]),
    ]
}
