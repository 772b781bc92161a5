//! Static translation glossary: the project terminology table and the
//! per-language phrase tables.
//!
//! All tables are fixed at compile time and never mutated. Their iteration
//! order is part of the substitution contract: entries are applied top to
//! bottom, so overlapping substrings resolve in table order rather than by
//! longest match.

/// One domain term with its per-language equivalents.
#[derive(Debug, Clone, Copy)]
pub struct TermEntry {
    /// Source-language (Hungarian) term.
    pub source: &'static str,
    /// `(language code, equivalent)` pairs.
    pub equivalents: &'static [(&'static str, &'static str)],
}

impl TermEntry {
    /// Looks up the equivalent for a target language, if one is defined.
    pub fn equivalent(&self, language: &str) -> Option<&'static str> {
        self.equivalents
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, term)| *term)
    }
}

macro_rules! term {
    ($source:literal, en: $en:literal, de: $de:literal) => {
        TermEntry {
            source: $source,
            equivalents: &[("en", $en), ("de", $de)],
        }
    };
}

/// Project-specific terminology, applied before the phrase tables.
///
/// Several distinct source terms intentionally share a target equivalent
/// (synonyms like `Szponzor`/`Támogató`); they stay separate entries.
pub const TERMINOLOGY: &[TermEntry] = &[
    term!("Tag", en: "Member", de: "Mitglied"),
    term!("Tagok", en: "Members", de: "Mitglieder"),
    term!("Szakértő", en: "Expert", de: "Expert:In"),
    term!("Szakértők", en: "Experts", de: "Expert:Innen"),
    term!("Szponzor", en: "Sponsor", de: "Sponsor"),
    term!("Támogató", en: "Sponsor", de: "Sponsor"),
    term!("Program", en: "Program", de: "Programm"),
    term!("Programok", en: "Programs", de: "Programme"),
    term!("Közösség", en: "Community", de: "Gemeinschaft"),
    term!("Piactér", en: "Marketplace", de: "Marktplatz"),
    term!("Esemény", en: "Event", de: "Veranstaltung"),
    term!("Események", en: "Events", de: "Veranstaltungen"),
    term!("Voucher", en: "Voucher", de: "Gutschein"),
    term!("Kupon", en: "Voucher", de: "Gutschein"),
    term!("Műhelytitok", en: "Program", de: "Programm"),
    term!("Kurzus", en: "Program", de: "Programm"),
    term!("Kurzusok", en: "Programs", de: "Programme"),
];

const EN_PHRASES: &[(&str, &str)] = &[
    ("Nincs", "No"),
    ("Még nincs", "No ... yet"),
    ("Összes", "All"),
    ("Új", "New"),
    ("Mentés", "Save"),
    ("Mégse", "Cancel"),
    ("Törlés", "Delete"),
    ("Szerkesztés", "Edit"),
    ("Vissza", "Back"),
    ("Tovább", "Next"),
    ("Befejezve", "Completed"),
    ("Folyamatban", "In Progress"),
    ("Aktív", "Active"),
    ("Ingyenes", "Free"),
    ("Fizetős", "Paid"),
    ("Hiba", "Error"),
    ("Sikeres", "Successful"),
    ("Betöltés", "Loading"),
    ("Keresés", "Search"),
    ("Szűrés", "Filter"),
    ("Részletek", "Details"),
    ("Leírás", "Description"),
    ("Cím", "Title"),
    ("Kategória", "Category"),
    ("Státusz", "Status"),
    ("Dátum", "Date"),
    ("Ár", "Price"),
    ("Összeg", "Amount"),
    ("Felhasználó", "User"),
    ("Felhasználók", "Users"),
    ("Beállítások", "Settings"),
    ("Profil", "Profile"),
    ("Értesítések", "Notifications"),
    ("Üzenet", "Message"),
    ("Küldés", "Send"),
    ("Frissítés", "Refresh"),
    ("Letöltés", "Download"),
    ("Feltöltés", "Upload"),
    ("Megnyitás", "Open"),
    ("Bezárás", "Close"),
    ("Megerősítés", "Confirm"),
    ("Elutasítás", "Reject"),
    ("Jóváhagyás", "Approve"),
    ("Archivált", "Archived"),
    ("Piszkozat", "Draft"),
    ("Közzétéve", "Published"),
    ("Jelentkezés", "Join"),
    ("Lemondás", "Cancel"),
    ("Beváltás", "Redeem"),
    ("Foglalás", "Booking"),
    ("Résztvevő", "Participant"),
    ("Résztvevők", "Participants"),
    ("Támogatott", "Sponsored"),
    ("Megvásárolt", "Purchased"),
];

const DE_PHRASES: &[(&str, &str)] = &[
    ("Nincs", "Keine"),
    ("Még nincs", "Noch keine"),
    ("Összes", "Alle"),
    ("Új", "Neu"),
    ("Mentés", "Speichern"),
    ("Mégse", "Abbrechen"),
    ("Törlés", "Löschen"),
    ("Szerkesztés", "Bearbeiten"),
    ("Vissza", "Zurück"),
    ("Tovább", "Weiter"),
    ("Befejezve", "Abgeschlossen"),
    ("Folyamatban", "In Bearbeitung"),
    ("Aktív", "Aktiv"),
    ("Ingyenes", "Kostenlos"),
    ("Fizetős", "Kostenpflichtig"),
    ("Hiba", "Fehler"),
    ("Sikeres", "Erfolgreich"),
    ("Betöltés", "Laden"),
    ("Keresés", "Suchen"),
    ("Szűrés", "Filtern"),
    ("Részletek", "Details"),
    ("Leírás", "Beschreibung"),
    ("Cím", "Titel"),
    ("Kategória", "Kategorie"),
    ("Státusz", "Status"),
    ("Dátum", "Datum"),
    ("Ár", "Preis"),
    ("Összeg", "Betrag"),
    ("Felhasználó", "Benutzer"),
    ("Felhasználók", "Benutzer"),
    ("Beállítások", "Einstellungen"),
    ("Profil", "Profil"),
    ("Értesítések", "Benachrichtigungen"),
    ("Üzenet", "Nachricht"),
    ("Küldés", "Senden"),
    ("Frissítés", "Aktualisieren"),
    ("Letöltés", "Herunterladen"),
    ("Feltöltés", "Hochladen"),
    ("Megnyitás", "Öffnen"),
    ("Bezárás", "Schließen"),
    ("Megerősítés", "Bestätigen"),
    ("Elutasítás", "Ablehnen"),
    ("Jóváhagyás", "Genehmigen"),
    ("Archivált", "Archiviert"),
    ("Piszkozat", "Entwurf"),
    ("Közzétéve", "Veröffentlicht"),
    ("Jelentkezés", "Anmelden"),
    ("Lemondás", "Stornieren"),
    ("Beváltás", "Einlösen"),
    ("Foglalás", "Buchung"),
    ("Résztvevő", "Teilnehmer"),
    ("Résztvevők", "Teilnehmer"),
    ("Támogatott", "Gesponsert"),
    ("Megvásárolt", "Gekauft"),
];

/// Returns the phrase table for a target language, in application order.
pub fn phrases(language: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match language {
        "en" => Some(EN_PHRASES),
        "de" => Some(DE_PHRASES),
        _ => None,
    }
}

/// Whether the glossary can target `language` at all.
pub fn supports(language: &str) -> bool {
    phrases(language).is_some()
}
