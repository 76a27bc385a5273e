//! User-visible strings in the supported languages

/// Every piece of text the dashboard shows, for one language
#[derive(Debug, Clone, PartialEq)]
pub struct Messages {
    pub info_title: &'static str,
    pub items_title: &'static str,
    pub health_title: &'static str,

    pub loading: &'static str,
    pub loading_items: &'static str,
    pub checking: &'static str,

    pub name_label: &'static str,
    pub version_label: &'static str,
    pub description_label: &'static str,
    pub environment_label: &'static str,
    pub status_label: &'static str,
    pub id_label: &'static str,

    pub info_error: &'static str,
    pub items_error: &'static str,
    pub no_items: &'static str,
    pub items_above: &'static str,
    pub items_below: &'static str,
    pub items_scroll_hint: &'static str,
    pub health_ok: &'static str,
    pub health_error_status: &'static str,
    pub health_error: &'static str,

    pub not_requested: &'static str,
    pub url_modal_title: &'static str,
    pub url_modal_label: &'static str,
    pub url_modal_help: &'static str,
    pub quit_hint: &'static str,
    pub url_hint: &'static str,
}

pub static EN: Messages = Messages {
    info_title: "API Info",
    items_title: "Items",
    health_title: "Server Health",

    loading: "Loading...",
    loading_items: "Loading items...",
    checking: "Checking...",

    name_label: "Name",
    version_label: "Version",
    description_label: "Description",
    environment_label: "Environment",
    status_label: "Status",
    id_label: "ID",

    info_error: "❌ Could not load the API information",
    items_error: "❌ Could not load the items",
    no_items: "No items available",
    items_above: "above",
    items_below: "more",
    items_scroll_hint: "j/k: scroll",
    health_ok: "✅ The server is running correctly",
    health_error_status: "Error",
    health_error: "❌ Could not connect to the server",

    not_requested: "Not loaded yet",
    url_modal_title: " Server URL ",
    url_modal_label: "Origin (http:// or https://):",
    url_modal_help: "Enter: Save  |  Ctrl+L: Clear  |  Esc: Cancel",
    quit_hint: "q:Quit",
    url_hint: ",:Server URL",
};

pub static ES: Messages = Messages {
    info_title: "Información de la API",
    items_title: "Items",
    health_title: "Salud del servidor",

    loading: "Cargando...",
    loading_items: "Cargando items...",
    checking: "Verificando...",

    name_label: "Nombre",
    version_label: "Versión",
    description_label: "Descripción",
    environment_label: "Entorno",
    status_label: "Estado",
    id_label: "ID",

    info_error: "❌ Error al cargar la información de la API",
    items_error: "❌ Error al cargar los items",
    no_items: "No hay items disponibles",
    items_above: "arriba",
    items_below: "más",
    items_scroll_hint: "j/k: desplazar",
    health_ok: "✅ El servidor está funcionando correctamente",
    health_error_status: "Error",
    health_error: "❌ No se pudo conectar con el servidor",

    not_requested: "Sin cargar",
    url_modal_title: " URL del servidor ",
    url_modal_label: "Origen (http:// o https://):",
    url_modal_help: "Enter: Guardar  |  Ctrl+L: Limpiar  |  Esc: Cancelar",
    quit_hint: "q:Salir",
    url_hint: ",:URL del servidor",
};

impl Messages {
    /// Look up a language by code; anything unknown gets English
    pub fn for_language(code: &str) -> &'static Messages {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => &ES,
            _ => &EN,
        }
    }
}
