//! Site translations.
//!
//! The language is part of each request (`?lang=it`), never global state:
//! handlers resolve a [`Language`] and hand its [`Strings`] table to the
//! template they render.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    It,
    Es,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::It, Language::Es];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::It => "it",
            Language::Es => "es",
        }
    }

    /// Label shown in the language switcher
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::It => "Italiano",
            Language::Es => "Español",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::It => &IT,
            Language::Es => &ES,
        }
    }

    /// Lenient parse for query parameters: unknown codes fall back to English.
    pub fn from_param(param: Option<&str>) -> Self {
        param.and_then(|p| p.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "it" => Ok(Language::It),
            "es" => Ok(Language::Es),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown language code '{0}'")]
pub struct UnknownLanguage(String);

/// Every user-facing string of the site in one language.
#[derive(Debug)]
pub struct Strings {
    // Navigation
    pub home: &'static str,
    pub rooms: &'static str,
    pub availability: &'static str,
    pub contact: &'static str,
    pub about: &'static str,

    // Hero
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_description: &'static str,
    pub book_now: &'static str,
    pub explore_rooms: &'static str,

    // About
    pub about_title: &'static str,
    pub about_text: &'static str,

    // Rooms
    pub rooms_title: &'static str,
    pub rooms_subtitle: &'static str,
    pub sea_view: &'static str,
    pub sea_view_description: &'static str,
    pub family_suite: &'static str,
    pub family_description: &'static str,
    pub all_rooms_include: &'static str,
    pub free_wifi: &'static str,
    pub air_conditioning: &'static str,
    pub welcome_amenities: &'static str,
    pub free_parking: &'static str,
    pub from_price: &'static str,
    pub per_night: &'static str,

    // Availability
    pub availability_subtitle: &'static str,
    pub available: &'static str,
    pub booked: &'static str,
    pub past_date: &'static str,
    pub previous_month: &'static str,
    pub next_month: &'static str,
    pub ready_to_book: &'static str,
    pub ready_to_book_text: &'static str,
    pub month_names: [&'static str; 12],
    /// Sunday first
    pub weekday_names: [&'static str; 7],

    // Contact
    pub contact_title: &'static str,
    pub contact_subtitle: &'static str,
    pub full_name: &'static str,
    pub email_address: &'static str,
    pub check_in_date: &'static str,
    pub check_out_date: &'static str,
    pub special_requests: &'static str,
    pub send_request: &'static str,
    pub inquiry_sent: &'static str,
    pub inquiry_failed: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,

    // Footer
    pub privacy_policy: &'static str,
    pub terms_conditions: &'static str,
}

impl Strings {
    /// Localized month name, `month` 1-12
    pub fn month_name(&self, month: u32) -> &'static str {
        self.month_names[(month.clamp(1, 12) - 1) as usize]
    }
}

const ADDRESS: &str = "Via dell'Arancio, 20, Marina di Ragusa, Sicilia, Italia";
const PHONE: &str = "+39 0932 123456";
const EMAIL: &str = "info@hotelitaca.com";

pub static EN: Strings = Strings {
    home: "Home",
    rooms: "Rooms & Rates",
    availability: "Availability",
    contact: "Contact",
    about: "About",

    hero_title: "Welcome to Apartamento Itaca",
    hero_subtitle: "Experience Mediterranean luxury in the neighbourhood of Marina di Ragusa, Sicily",
    hero_description: "Discover our elegant boutique apartments where timeless Sicilian charm meets modern comfort",
    book_now: "Book Now",
    explore_rooms: "Explore Rooms",

    about_title: "Our Story",
    about_text: "Apartamento Itaca is a boutique gem nestled in the enchanting Marina di Ragusa, Sicily. Our place combines traditional Sicilian hospitality with contemporary elegance, offering guests an unforgettable Mediterranean experience.",

    rooms_title: "Our Apartments",
    rooms_subtitle: "Choose from our two beautiful apartments, each offering comfort and authentic Sicilian hospitality",
    sea_view: "Sea View Suite",
    sea_view_description: "Spacious apartment with stunning sea views and modern amenities",
    family_suite: "Family Suite",
    family_description: "Family-friendly apartment perfect for longer stays",
    all_rooms_include: "All Rooms Include",
    free_wifi: "Free WiFi",
    air_conditioning: "Air Conditioning",
    welcome_amenities: "Welcome Amenities",
    free_parking: "Free Parking",
    from_price: "From",
    per_night: "night",

    availability_subtitle: "Check our real-time availability and book your perfect dates",
    available: "Available",
    booked: "Booked",
    past_date: "Past Date",
    previous_month: "Previous month",
    next_month: "Next month",
    ready_to_book: "Ready to Book?",
    ready_to_book_text: "Contact us directly to secure your preferred dates and receive personalized assistance",
    month_names: [
        "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ],
    weekday_names: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],

    contact_title: "Book Your Stay",
    contact_subtitle: "Fill out the form below and we'll get back to you soon",
    full_name: "Full Name",
    email_address: "Email Address",
    check_in_date: "Check-in Date",
    check_out_date: "Check-out Date",
    special_requests: "Special Requests",
    send_request: "Send Booking Request",
    inquiry_sent: "Booking request sent! We'll get back to you within 24 hours to confirm your reservation.",
    inquiry_failed: "We could not send your request. Please try again or call us.",
    address: ADDRESS,
    phone: PHONE,
    email: EMAIL,

    privacy_policy: "Privacy Policy",
    terms_conditions: "Terms & Conditions",
};

pub static IT: Strings = Strings {
    home: "Home",
    rooms: "Camere e Tariffe",
    availability: "Disponibilità",
    contact: "Contatti",
    about: "Chi Siamo",

    hero_title: "Benvenuti all'Apartamento Itaca",
    hero_subtitle: "Vivete il lusso mediterraneo nelle vicinanze di Marina di Ragusa, Sicilia",
    hero_description: "Scoprite i nostri eleganti appartamenti dove il fascino siciliano si incontra con il comfort moderno",
    book_now: "Prenota Ora",
    explore_rooms: "Esplora Camere",

    about_title: "La Nostra Storia",
    about_text: "Apartamento Itaca è una gemma boutique immersa nell'incantevole Marina di Ragusa, Sicilia. Il nostro posto combina l'ospitalità tradizionale siciliana con l'eleganza contemporanea.",

    rooms_title: "I Nostri Appartamenti",
    rooms_subtitle: "Scegli tra i nostri due bellissimi appartamenti, ognuno offre comfort e autentica ospitalità siciliana",
    sea_view: "Suite Vista Mare",
    sea_view_description: "Appartamento spazioso con vista mare mozzafiato e servizi moderni",
    family_suite: "Suite Famiglia",
    family_description: "Appartamento adatto alle famiglie, perfetto per soggiorni più lunghi",
    all_rooms_include: "Tutte le Camere Includono",
    free_wifi: "WiFi Gratuito",
    air_conditioning: "Aria Condizionata",
    welcome_amenities: "Servizi di Benvenuto",
    free_parking: "Parcheggio Gratuito",
    from_price: "Da",
    per_night: "notte",

    availability_subtitle: "Controlla la nostra disponibilità in tempo reale e prenota le tue date perfette",
    available: "Disponibile",
    booked: "Prenotato",
    past_date: "Data Passata",
    previous_month: "Mese precedente",
    next_month: "Mese successivo",
    ready_to_book: "Pronto a Prenotare?",
    ready_to_book_text: "Contattaci direttamente per assicurarti le date preferite e ricevere assistenza personalizzata",
    month_names: [
        "Gennaio", "Febbraio", "Marzo", "Aprile", "Maggio", "Giugno", "Luglio", "Agosto",
        "Settembre", "Ottobre", "Novembre", "Dicembre",
    ],
    weekday_names: ["Dom", "Lun", "Mar", "Mer", "Gio", "Ven", "Sab"],

    contact_title: "Prenota il Tuo Soggiorno",
    contact_subtitle: "Compila il modulo qui sotto e ti ricontatteremo presto",
    full_name: "Nome Completo",
    email_address: "Indirizzo Email",
    check_in_date: "Data di Check-in",
    check_out_date: "Data di Check-out",
    special_requests: "Richieste Speciali",
    send_request: "Invia Richiesta",
    inquiry_sent: "Richiesta inviata! Ti risponderemo entro 24 ore per confermare la prenotazione.",
    inquiry_failed: "Non è stato possibile inviare la richiesta. Riprova o chiamaci.",
    address: ADDRESS,
    phone: PHONE,
    email: EMAIL,

    privacy_policy: "Privacy Policy",
    terms_conditions: "Termini e Condizioni",
};

pub static ES: Strings = Strings {
    home: "Inicio",
    rooms: "Habitaciones y Tarifas",
    availability: "Disponibilidad",
    contact: "Contacto",
    about: "Nosotros",

    hero_title: "Bienvenidos al Apartamento Itaca",
    hero_subtitle: "Experimenta el lujo mediterráneo en la vecindad de Marina di Ragusa, Sicilia",
    hero_description: "Descubre nuestros elegantes apartamentos donde el encanto siciliano se encuentra con el confort moderno",
    book_now: "Reservar Ahora",
    explore_rooms: "Explorar Habitaciones",

    about_title: "Nuestra Historia",
    about_text: "Apartamento Itaca es una joya boutique situada en la encantadora Marina di Ragusa, Sicilia. Nuestro lugar combina la hospitalidad tradicional siciliana con la elegancia contemporánea.",

    rooms_title: "Nuestros Apartamentos",
    rooms_subtitle: "Elige entre nuestros dos hermosos apartamentos, cada uno ofrece comodidad y auténtica hospitalidad siciliana",
    sea_view: "Suite Vista al Mar",
    sea_view_description: "Apartamento espacioso con vistas al mar impresionantes y servicios modernos",
    family_suite: "Suite Familiar",
    family_description: "Apartamento familiar perfecto para estancias más largas",
    all_rooms_include: "Todas las Habitaciones Incluyen",
    free_wifi: "WiFi Gratuito",
    air_conditioning: "Aire Acondicionado",
    welcome_amenities: "Servicios de Bienvenida",
    free_parking: "Estacionamiento Gratuito",
    from_price: "Desde",
    per_night: "noche",

    availability_subtitle: "Consulta nuestra disponibilidad en tiempo real y reserva tus fechas perfectas",
    available: "Disponible",
    booked: "Reservado",
    past_date: "Fecha Pasada",
    previous_month: "Mes anterior",
    next_month: "Mes siguiente",
    ready_to_book: "¿Listo para Reservar?",
    ready_to_book_text: "Contáctanos directamente para asegurar tus fechas preferidas y recibir asistencia personalizada",
    month_names: [
        "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio", "Julio", "Agosto",
        "Septiembre", "Octubre", "Noviembre", "Diciembre",
    ],
    weekday_names: ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"],

    contact_title: "Reserva tu Estancia",
    contact_subtitle: "Completa el formulario a continuación y te contactaremos pronto",
    full_name: "Nombre Completo",
    email_address: "Dirección de Email",
    check_in_date: "Fecha de Check-in",
    check_out_date: "Fecha de Check-out",
    special_requests: "Solicitudes Especiales",
    send_request: "Enviar Solicitud",
    inquiry_sent: "¡Solicitud enviada! Te responderemos en 24 horas para confirmar tu reserva.",
    inquiry_failed: "No pudimos enviar tu solicitud. Inténtalo de nuevo o llámanos.",
    address: ADDRESS,
    phone: PHONE,
    email: EMAIL,

    privacy_policy: "Política de Privacidad",
    terms_conditions: "Términos y Condiciones",
};
