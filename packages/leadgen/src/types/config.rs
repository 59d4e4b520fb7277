//! Immutable configuration data for the resolver, enrichment, and push
//! stages. Everything here is plain data passed into constructors, so tests
//! can substitute fixture tables.

use std::collections::HashMap;
use std::time::Duration;

use super::contact::Persona;
use super::district::normalize_name;

/// Configuration for the domain resolver: the curated override table, the
/// slug substitution list, and the candidate pattern list.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Known-correct name → domain mappings, keyed by normalized name.
    /// Checked before any candidate generation.
    overrides: HashMap<String, String>,
    /// Phrase substitutions applied to the lowercased name, in order.
    /// Longest phrases first so "consolidated independent school district"
    /// is not eaten by the shorter "independent school district" rule.
    pub substitutions: Vec<(String, String)>,
    /// Candidate domain templates; `{slug}` is replaced with the slug.
    pub patterns: Vec<String>,
    /// Per-candidate probe timeout.
    pub probe_timeout: Duration,
    /// Fixed pause before each probe.
    pub probe_delay_ms: u64,
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
            substitutions: vec![
                (
                    "consolidated independent school district".to_string(),
                    "cisd".to_string(),
                ),
                ("independent school district".to_string(), "isd".to_string()),
            ],
            patterns: vec![
                "{slug}.org".to_string(),
                "{slug}.net".to_string(),
                "{slug}.us".to_string(),
                "www.{slug}.org".to_string(),
                "www.{slug}.net".to_string(),
                "{slug}schools.org".to_string(),
                "{slug}schools.net".to_string(),
            ],
            probe_timeout: Duration::from_secs(3),
            probe_delay_ms: 500,
        }
    }

    /// Add one override mapping.
    pub fn with_override(mut self, name: &str, domain: &str) -> Self {
        self.overrides
            .insert(normalize_name(name), domain.to_string());
        self
    }

    /// Replace the candidate pattern list.
    pub fn with_patterns(mut self, patterns: Vec<String>) -> Self {
        self.patterns = patterns;
        self
    }

    /// Look up an override by district name.
    pub fn override_for(&self, name: &str) -> Option<&str> {
        self.overrides.get(&normalize_name(name)).map(|s| s.as_str())
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// The hand-verified Texas district table.
    pub fn texas_defaults() -> Self {
        let mut config = Self::new();
        for (name, domain) in TEXAS_KNOWN_DOMAINS {
            config = config.with_override(name, domain);
        }
        config
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::texas_defaults()
    }
}

/// Verified name → domain mappings for Texas districts.
const TEXAS_KNOWN_DOMAINS: &[(&str, &str)] = &[
    ("Frisco ISD", "friscoisd.org"),
    ("Leander ISD", "leanderisd.org"),
    ("Round Rock ISD", "roundrockisd.org"),
    ("Keller ISD", "kellerisd.net"),
    ("Humble ISD", "humbleisd.net"),
    ("Prosper ISD", "prosper-isd.net"),
    ("Georgetown ISD", "georgetownisd.org"),
    ("Hays CISD", "hayscisd.net"),
    ("Aledo ISD", "aledoisd.org"),
    ("Dripping Springs ISD", "dsisdtx.us"),
    ("Lake Travis ISD", "ltisdschools.org"),
    ("Boerne ISD", "boerneisd.net"),
    ("Plano ISD", "pisd.edu"),
    ("McKinney ISD", "mckinneyisd.net"),
    ("Allen ISD", "allenisd.org"),
    ("Denton ISD", "dentonisd.org"),
    ("Northwest ISD", "nisdtx.org"),
    ("Mansfield ISD", "mansfieldisd.org"),
    ("Coppell ISD", "coppellisd.com"),
    ("Southlake Carroll ISD", "southlakecarroll.edu"),
    ("Grapevine-Colleyville ISD", "gcisd.net"),
    ("Highland Park ISD", "hpisd.org"),
    ("Eanes ISD", "eanesisd.net"),
    ("Wylie ISD", "wylieisd.net"),
    ("Lovejoy ISD", "lovejoyisd.com"),
    ("Rockwall ISD", "rockwallisd.com"),
    ("Midlothian ISD", "misd.gs"),
    ("Forney ISD", "forneyisd.net"),
    ("Little Elm ISD", "leisd.net"),
    ("Comal ISD", "comalisd.org"),
    ("Conroe ISD", "conroeisd.net"),
    ("Cypress-Fairbanks ISD", "cfisd.net"),
    ("Spring Branch ISD", "springbranchisd.com"),
    ("Klein ISD", "kleinisd.net"),
    ("Tomball ISD", "tomballisd.net"),
    ("Pearland ISD", "pearlandisd.org"),
    ("Clear Creek ISD", "ccisd.net"),
    ("Fort Bend ISD", "fortbendisd.com"),
    ("Katy ISD", "katyisd.org"),
    ("Lamar CISD", "lcisd.org"),
    ("Pasadena ISD", "pasadenaisd.org"),
    ("Spring ISD", "springisd.org"),
    ("Aldine ISD", "aldineisd.org"),
    ("Houston ISD", "houstonisd.org"),
    ("Dallas ISD", "dallasisd.org"),
    ("Fort Worth ISD", "fwisd.org"),
    ("Austin ISD", "austinisd.org"),
    ("San Antonio ISD", "saisd.net"),
    ("Arlington ISD", "aisd.net"),
    ("Garland ISD", "garlandisd.net"),
    ("Irving ISD", "irvingisd.net"),
    ("Mesquite ISD", "mesquiteisd.org"),
    ("Richardson ISD", "risd.org"),
    ("Carrollton-Farmers Branch ISD", "cfbisd.edu"),
    ("Lewisville ISD", "lisd.net"),
    ("Birdville ISD", "birdvilleschools.net"),
    ("Crowley ISD", "crowleyisdtx.org"),
    ("Eagle Mountain-Saginaw ISD", "emsisd.com"),
    ("Hurst-Euless-Bedford ISD", "hebisd.edu"),
    ("Waxahachie ISD", "wisd.org"),
    ("Weatherford ISD", "weatherfordisd.com"),
    ("Burleson ISD", "burleson.k12.tx.us"),
    ("Joshua ISD", "joshuaisd.org"),
    ("Cleburne ISD", "c-isd.com"),
    ("Granbury ISD", "granburyisd.org"),
    ("New Braunfels ISD", "nbisd.org"),
    ("Schertz-Cibolo-Universal City ISD", "scuc.txed.net"),
    ("Judson ISD", "judsonisd.org"),
    ("North East ISD", "neisd.net"),
    ("Northside ISD", "nisd.net"),
    ("San Marcos CISD", "smcisd.net"),
    ("Pflugerville ISD", "pfisd.net"),
    ("Manor ISD", "manorisd.net"),
    ("Del Valle ISD", "dvisd.net"),
    ("Cedar Park", "leanderisd.org"),
    ("Bastrop ISD", "bfrisk.org"),
    ("Lockhart ISD", "lockhartisd.org"),
    ("Seguin ISD", "seguinisd.net"),
    ("Killeen ISD", "killeenisd.org"),
    ("Temple ISD", "tisd.org"),
    ("Belton ISD", "bisd.net"),
    ("Waco ISD", "wacoisd.org"),
    ("Midway ISD", "midwayisd.org"),
    ("Bryan ISD", "bryanisd.org"),
    ("College Station ISD", "csisd.org"),
    ("Tyler ISD", "tylerisd.org"),
    ("Longview ISD", "lisd.org"),
    ("Nacogdoches ISD", "nacisd.org"),
    ("Lufkin ISD", "lufkinisd.org"),
    ("Texarkana ISD", "txkisd.net"),
    ("Amarillo ISD", "amaisd.org"),
    ("Lubbock ISD", "lubbockisd.org"),
    ("Midland ISD", "midlandisd.net"),
    ("Odessa", "ectorcountyisd.org"),
    ("Ector County ISD", "ectorcountyisd.org"),
    ("El Paso ISD", "episd.org"),
    ("Socorro ISD", "sisd.net"),
    ("Ysleta ISD", "yisd.net"),
    ("Corpus Christi ISD", "ccisd.us"),
    ("Flour Bluff ISD", "flourbluffschools.net"),
    ("Calallen ISD", "calallen.org"),
    ("Laredo ISD", "laredoisd.org"),
    ("United ISD", "uisd.net"),
    ("McAllen ISD", "mcallenisd.org"),
    ("Edinburg CISD", "ecisd.us"),
    ("Pharr-San Juan-Alamo ISD", "psjaisd.us"),
    ("Brownsville ISD", "bisd.us"),
    ("Harlingen CISD", "hcisd.org"),
];

/// Configuration for the enrichment stage.
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    /// Title keywords sent to the people-search capability.
    pub target_titles: Vec<String>,
    /// Max person stubs requested per district.
    pub limit: u32,
    /// Fixed pause before every outbound call.
    pub rate_limit_ms: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            target_titles: [
                "Superintendent",
                "Director of Safety",
                "Chief of Safety",
                "Director of Security",
                "Chief Operations Officer",
                "COO",
                "Assistant Superintendent",
                "Chief of Police",
                "Director of Student Safety",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            limit: 10,
            rate_limit_ms: 1_000,
        }
    }
}

/// Persona → campaign id routing for the push stage.
#[derive(Debug, Clone)]
pub struct CampaignRouting {
    campaigns: HashMap<Persona, String>,
}

impl CampaignRouting {
    pub fn new() -> Self {
        Self {
            campaigns: HashMap::new(),
        }
    }

    /// Route one persona to a campaign id.
    pub fn with_campaign(mut self, persona: Persona, campaign_id: impl Into<String>) -> Self {
        self.campaigns.insert(persona, campaign_id.into());
        self
    }

    /// Route every outreach persona to a single campaign id.
    pub fn single(campaign_id: impl Into<String>) -> Self {
        let id = campaign_id.into();
        Self::new()
            .with_campaign(Persona::Superintendent, id.clone())
            .with_campaign(Persona::SafetyDirector, id)
    }

    pub fn campaign_for(&self, persona: Persona) -> Option<&str> {
        self.campaigns.get(&persona).map(|s| s.as_str())
    }
}

impl Default for CampaignRouting {
    fn default() -> Self {
        Self::new()
            .with_campaign(Persona::Superintendent, "camp_tx_superintendents_q1_2026")
            .with_campaign(Persona::SafetyDirector, "camp_tx_safety_directors_q1_2026")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_lookup_is_whitespace_insensitive() {
        let config = ResolverConfig::texas_defaults();
        assert_eq!(config.override_for("Leander ISD"), Some("leanderisd.org"));
        assert_eq!(config.override_for("  Leander   ISD "), Some("leanderisd.org"));
        assert_eq!(config.override_for("Nowhere ISD"), None);
    }

    #[test]
    fn test_default_routing_covers_outreach_personas() {
        let routing = CampaignRouting::default();
        assert!(routing.campaign_for(Persona::Superintendent).is_some());
        assert!(routing.campaign_for(Persona::SafetyDirector).is_some());
        assert!(routing.campaign_for(Persona::Other).is_none());
    }

    #[test]
    fn test_single_campaign_override() {
        let routing = CampaignRouting::single("camp_x");
        assert_eq!(routing.campaign_for(Persona::Superintendent), Some("camp_x"));
        assert_eq!(routing.campaign_for(Persona::SafetyDirector), Some("camp_x"));
    }
}
