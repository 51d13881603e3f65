use utoipa::{Modify, OpenApi};

use crate::features::tickets::{dtos as tickets_dtos, handlers as tickets_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        tickets_handlers::create_ticket,
        tickets_handlers::add_message_to_ticket,
        tickets_handlers::get_ticket,
        tickets_handlers::update_ticket,
        tickets_handlers::delete_ticket,
    ),
    components(
        schemas(
            tickets_dtos::TicketMessageDto,
        )
    ),
    tags(
        (name = "tickets", description = "Support tickets and their message history"),
    ),
    info(
        title = "Ticket Service API",
        version = "0.1.0",
        description = "Support ticket endpoints",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_ticket_routes() {
        let doc = ApiDoc::openapi();

        for path in [
            "/ticket/create",
            "/ticket/addMessage",
            "/ticket/get",
            "/ticket/update",
            "/ticket/delete",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Suporte".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Suporte");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("desc"));
    }
}
