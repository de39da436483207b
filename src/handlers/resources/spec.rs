//! Per-collection descriptors for the shared CRUD engine. One table drives
//! every collection-specific route: each entry names the collection, its
//! validation rules and the French labels used in response messages.

/// Uniqueness constraint on one field, checked case-insensitively.
pub struct Unique {
    pub field: &'static str,
    pub conflict: &'static str,
}

pub struct ResourceSpec {
    /// Path segment the resource is mounted under.
    pub route: &'static str,
    /// Top-level document key holding the records.
    pub collection: &'static str,
    /// Singular label, capitalized ("Département").
    pub label: &'static str,
    /// Plural label, lowercase ("départements").
    pub label_plural: &'static str,
    /// Fields that must be present and non-empty on create.
    pub required: &'static [&'static str],
    pub unique: Option<Unique>,
    /// Fields coerced to numbers on input; unparseable values are rejected.
    pub numeric: &'static [&'static str],
    /// When set, records flagged `is_required: true` can neither be updated
    /// nor deleted through the API.
    pub protect_required_flag: bool,
}

impl ResourceSpec {
    pub fn list_message(&self) -> String {
        format!("Liste des {}", self.label_plural)
    }

    pub fn found_message(&self) -> String {
        format!("{} trouvé", self.label)
    }

    pub fn created_message(&self) -> String {
        format!("{} créé", self.label)
    }

    pub fn updated_message(&self) -> String {
        format!("{} mis à jour", self.label)
    }

    pub fn deleted_message(&self) -> String {
        format!("{} supprimé", self.label)
    }

    pub fn not_found_message(&self) -> String {
        format!("{} introuvable", self.label)
    }
}

pub const DEPARTEMENTS: ResourceSpec = ResourceSpec {
    route: "departements",
    collection: "departements",
    label: "Département",
    label_plural: "départements",
    required: &["code", "libelle"],
    unique: Some(Unique {
        field: "code",
        conflict: "Code déjà existant",
    }),
    numeric: &[],
    protect_required_flag: false,
};

pub const PARAMETRES_GENERAUX: ResourceSpec = ResourceSpec {
    route: "parametres-generaux",
    collection: "parametres_generaux",
    label: "Paramètre",
    label_plural: "paramètres généraux",
    required: &["type", "valeur"],
    unique: Some(Unique {
        field: "type",
        conflict: "Type déjà existant",
    }),
    numeric: &[],
    protect_required_flag: true,
};

pub const CANAUX: ResourceSpec = ResourceSpec {
    route: "canaux",
    collection: "canaux",
    label: "Canal",
    label_plural: "canaux",
    required: &["code", "libelle"],
    unique: Some(Unique {
        field: "code",
        conflict: "Code déjà existant",
    }),
    numeric: &[],
    protect_required_flag: false,
};

pub const SIEGES: ResourceSpec = ResourceSpec {
    route: "sieges",
    collection: "sieges",
    label: "Siège",
    label_plural: "sièges",
    required: &["code", "libelle"],
    unique: Some(Unique {
        field: "code",
        conflict: "Code déjà existant",
    }),
    numeric: &[],
    protect_required_flag: false,
};

pub const EMPLOYEES: ResourceSpec = ResourceSpec {
    route: "employees",
    collection: "employees",
    label: "Employé",
    label_plural: "employés",
    required: &["nom", "prenom"],
    unique: None,
    numeric: &["departement_id", "siege_id"],
    protect_required_flag: false,
};

pub const AVENANTS: ResourceSpec = ResourceSpec {
    route: "avenants",
    collection: "avenants",
    label: "Avenant",
    label_plural: "avenants",
    required: &["contrat_id", "type"],
    unique: None,
    numeric: &["contrat_id", "employe_id"],
    protect_required_flag: false,
};

pub const COMPTEURS_CONGES: ResourceSpec = ResourceSpec {
    route: "compteurs-conges",
    collection: "compteurs_conges",
    label: "Compteur de congés",
    label_plural: "compteurs de congés",
    required: &["employe_id"],
    unique: None,
    numeric: &["employe_id", "solde"],
    protect_required_flag: false,
};

/// Resources served under `/settings/`. `sieges` list/show are overridden by
/// join-enriched handlers; everything else goes through the shared engine.
pub const SETTINGS: &[&ResourceSpec] = &[&DEPARTEMENTS, &PARAMETRES_GENERAUX, &CANAUX, &SIEGES];

pub fn settings_resource(route: &str) -> Option<&'static ResourceSpec> {
    SETTINGS.iter().copied().find(|spec| spec.route == route)
}
