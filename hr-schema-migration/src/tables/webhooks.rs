use super::active;
use crate::schema::{
    Field,
    OnDelete::{Cascade, Restrict},
    TableDef,
};

pub fn tables() -> Vec<TableDef> {
    vec![
        TableDef::entity("webhook_subscriptions")
            .field(Field::string("name", 200))
            .field(Field::string("target_url", 2048))
            .field(Field::string("secret_hash", 256))
            .field(Field::string("content_type", 64).default_str("application/json"))
            .field(Field::small_integer("max_retries").default_int(5))
            .field(Field::integer("timeout_seconds").default_int(10))
            .field(active())
            .field(Field::timestamp("disabled_at").null())
            .field(Field::string("disabled_reason", 512).null()),
        TableDef::record("webhook_subscription_events")
            .belongs_to("webhook_subscription_id", "webhook_subscriptions", Cascade)
            .field(Field::string("event_type", 128))
            .unique(&["webhook_subscription_id", "event_type"]),
        TableDef::record("webhook_events")
            .field(Field::string("event_type", 128))
            .field(Field::string("entity_type", 64).null())
            .field(Field::uuid("entity_id").null())
            .field(Field::json("payload"))
            .field(Field::timestamp("occurred_at").default_now())
            .index(&["organization_id", "occurred_at"]),
        TableDef::record("webhook_deliveries")
            .belongs_to("webhook_event_id", "webhook_events", Cascade)
            .belongs_to("webhook_subscription_id", "webhook_subscriptions", Cascade)
            .field(Field::status("status", "Pending"))
            .field(Field::small_integer("attempt_count").default_int(0))
            .field(Field::timestamp("next_attempt_at").null())
            .field(Field::timestamp("delivered_at").null())
            .unique(&["webhook_event_id", "webhook_subscription_id"])
            .index(&["status", "next_attempt_at"]),
        TableDef::record("webhook_delivery_attempts")
            .belongs_to("webhook_delivery_id", "webhook_deliveries", Cascade)
            .field(Field::small_integer("attempt_number"))
            .field(Field::timestamp("attempted_at").default_now())
            .field(Field::small_integer("response_status").null())
            .field(Field::text("response_body").null())
            .field(Field::integer("duration_ms").null())
            .field(Field::text("error_message").null())
            .unique(&["webhook_delivery_id", "attempt_number"]),
        TableDef::record("webhook_signing_keys")
            .belongs_to("webhook_subscription_id", "webhook_subscriptions", Restrict)
            .field(Field::string("key_id", 64))
            .field(Field::string("secret_hash", 256))
            .field(Field::timestamp("expires_at").null())
            .field(active())
            .unique(&["webhook_subscription_id", "key_id"]),
    ]
}
