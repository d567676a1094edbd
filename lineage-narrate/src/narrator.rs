//! The narration engine.
//!
//! [`Narrator`] borrows its collaborators and renders one sentence per
//! call: select a template key from what the records actually provide,
//! resolve it through the catalog, substitute values, and splice endnote
//! markers. Session state threads through the calls so the subject is
//! named once and then referred to by pronoun.

use tracing::{debug, warn};

use lineage_core::config::NarrateConfig;
use lineage_core::constants::{HEBREW_LANGUAGE, UNKNOWN_SPOUSE};
use lineage_core::display::{DeathRecordEstimator, NoEndnotes};
use lineage_core::models::{Event, EventKind, Family, Gender, Person};
use lineage_core::traits::{
    IAliveEstimator, IDateDisplay, IEndnoteLookup, ILocale, INameDisplay, IPlaceDisplay,
    ITreeStore,
};

use crate::age::AgeAtDeath;
use crate::catalog::{
    BirthKey, DeathKey, ParentSet, ParentageForm, ParentageKey, Phrasing, Rite, RiteKey,
    TemplateCatalog, TemplateKey, Tense, UnionDetail, UnionKey, UnionKind, UnionOrder,
    UnionPhrasing,
};
use crate::classify::{classify_date, presented_tier, DateTier};
use crate::facts;
use crate::prefix::hebrew_prefix;
use crate::render::{self, ValueMap};
use crate::session::NarrationSession;

static DEFAULT_ALIVE: DeathRecordEstimator = DeathRecordEstimator;
static DEFAULT_ENDNOTES: NoEndnotes = NoEndnotes;

/// Sentence narrator over one tree store.
pub struct Narrator<'a> {
    store: &'a dyn ITreeStore,
    dates: &'a dyn IDateDisplay,
    places: &'a dyn IPlaceDisplay,
    names: &'a dyn INameDisplay,
    locale: &'a dyn ILocale,
    alive: &'a dyn IAliveEstimator,
    endnotes: &'a dyn IEndnoteLookup,
    catalog: TemplateCatalog,
    config: NarrateConfig,
}

impl<'a> Narrator<'a> {
    pub fn new(
        store: &'a dyn ITreeStore,
        dates: &'a dyn IDateDisplay,
        places: &'a dyn IPlaceDisplay,
        names: &'a dyn INameDisplay,
        locale: &'a dyn ILocale,
        config: NarrateConfig,
    ) -> Self {
        Self {
            store,
            dates,
            places,
            names,
            locale,
            alive: &DEFAULT_ALIVE,
            endnotes: &DEFAULT_ENDNOTES,
            catalog: TemplateCatalog::new(),
            config,
        }
    }

    /// Swap in a richer liveness estimate than the death-record default.
    pub fn with_alive_estimator(mut self, alive: &'a dyn IAliveEstimator) -> Self {
        self.alive = alive;
        self
    }

    /// Attach a citation endnote lookup; the default renders no markers.
    pub fn with_endnotes(mut self, endnotes: &'a dyn IEndnoteLookup) -> Self {
        self.endnotes = endnotes;
        self
    }

    /// Replace the template catalog, typically with translated overrides.
    pub fn with_catalog(mut self, catalog: TemplateCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Open a narration session for a subject.
    pub fn start_subject(&self, person: &Person) -> NarrationSession {
        let first_name = if self.config.use_call_name {
            match &person.name.call {
                Some(call) if !call.is_empty() => call.clone(),
                _ => person.name.first.clone(),
            }
        } else {
            person.name.first.clone()
        };
        let alive = self.alive.probably_alive(person, self.store);
        let session = NarrationSession::new(&person.handle, first_name, alive);
        debug!(
            session_id = %session.session_id,
            subject = %person.handle,
            alive,
            "narration session started"
        );
        session
    }

    /// Sentence for the subject's birth, empty when neither a date nor a
    /// place can be shown.
    pub fn birth_sentence(&self, session: &mut NarrationSession) -> String {
        let person = match self.store.person(&session.subject) {
            Some(person) => person,
            None => return String::new(),
        };
        let event = person
            .birth_ref
            .as_deref()
            .and_then(|handle| self.store.event(handle));
        let (date_text, place_text) = self.event_strings(event.as_ref());
        let has_date = !date_text.is_empty();
        let has_place = !place_text.is_empty();
        if !has_date && !has_place {
            return String::new();
        }

        let tier = if has_date {
            presented_tier(
                event
                    .as_ref()
                    .map(|event| classify_date(&event.date))
                    .unwrap_or(DateTier::Absent),
            )
        } else {
            DateTier::Absent
        };
        let key: TemplateKey = BirthKey {
            tier,
            has_place,
            phrasing: self.phrasing(person.gender, session),
        }
        .into();
        let template = match self.template_for(&key) {
            Some(template) => template,
            None => return String::new(),
        };
        debug!(session_id = %session.session_id, key = %key.id(), "birth template selected");

        let mut values = ValueMap::new();
        values.bind_subject(&session.first_name);
        values.bind("birth_date", date_text.clone());
        values.bind("month_year", date_text.clone());
        values.bind("modified_date", date_text);
        values.bind("birth_place", place_text);
        let mut text = values.substitute(&template);
        if let Some(event) = &event {
            text = render::append_endnote(&text, &self.endnotes.endnote_numbers(event));
        }
        self.finish(session, text)
    }

    /// Sentence for the subject's death.
    ///
    /// `include_age` asks for the age-at-death tail; it only appears when
    /// an age could actually be computed from the vital events. With
    /// nothing recorded the verbose form still states the death, while
    /// succinct phrasing stays silent.
    pub fn death_sentence(&self, session: &mut NarrationSession, include_age: bool) -> String {
        let person = match self.store.person(&session.subject) {
            Some(person) => person,
            None => return String::new(),
        };
        let event = person
            .death_ref
            .as_deref()
            .and_then(|handle| self.store.event(handle));
        let (date_text, place_text) = self.event_strings(event.as_ref());
        let has_date = !date_text.is_empty();
        let has_place = !place_text.is_empty();
        if !has_date && !has_place && !self.config.verbose {
            return String::new();
        }

        let age = if include_age {
            AgeAtDeath::compute(self.store, self.dates, &person)
        } else {
            AgeAtDeath::unavailable()
        };

        let tier = if has_date {
            presented_tier(
                event
                    .as_ref()
                    .map(|event| classify_date(&event.date))
                    .unwrap_or(DateTier::Absent),
            )
        } else {
            DateTier::Absent
        };
        let key: TemplateKey = DeathKey {
            tier,
            has_place,
            phrasing: self.phrasing(person.gender, session),
            with_age: age.available,
        }
        .into();
        let template = match self.template_for(&key) {
            Some(template) => template,
            None => return String::new(),
        };
        debug!(session_id = %session.session_id, key = %key.id(), "death template selected");

        let mut values = ValueMap::new();
        values.bind_subject(&session.first_name);
        values.bind("death_date", date_text.clone());
        values.bind("month_year", date_text.clone());
        values.bind("modified_date", date_text);
        values.bind("death_place", place_text);
        values.bind("age", age.text);
        let mut text = values.substitute(&template);
        if let Some(event) = &event {
            text = render::append_endnote(&text, &self.endnotes.endnote_numbers(event));
        }
        self.finish(session, text)
    }

    /// Sentence for the subject's burial, empty without a burial event.
    pub fn burial_sentence(&self, session: &mut NarrationSession) -> String {
        self.rite_sentence(session, Rite::Burial)
    }

    /// Sentence for the subject's baptism, empty without a baptism event.
    /// The event's description, when recorded, is carried along after the
    /// sentence.
    pub fn baptism_sentence(&self, session: &mut NarrationSession) -> String {
        self.rite_sentence(session, Rite::Baptism)
    }

    /// Sentence for the subject's christening, empty without a
    /// christening event.
    pub fn christening_sentence(&self, session: &mut NarrationSession) -> String {
        self.rite_sentence(session, Rite::Christening)
    }

    fn rite_sentence(&self, session: &mut NarrationSession, rite: Rite) -> String {
        let person = match self.store.person(&session.subject) {
            Some(person) => person,
            None => return String::new(),
        };
        let event = match facts::primary_event(self.store, &person, rite.event_kind()) {
            Some(event) => event,
            None => return String::new(),
        };

        let (date_text, place_text) = self.event_strings(Some(&event));
        let has_date = !date_text.is_empty();
        let has_place = !place_text.is_empty();
        let tier = if has_date {
            presented_tier(classify_date(&event.date))
        } else {
            DateTier::Absent
        };

        let key: TemplateKey = RiteKey {
            rite,
            tier,
            has_place,
            phrasing: self.phrasing(person.gender, session),
        }
        .into();
        let template = match self.template_for(&key) {
            Some(template) => template,
            None => return String::new(),
        };
        debug!(session_id = %session.session_id, key = %key.id(), "rite template selected");

        let mut values = ValueMap::new();
        values.bind_subject(&session.first_name);
        values.bind(rite.date_placeholder(), date_text.clone());
        values.bind("month_year", date_text.clone());
        values.bind("modified_date", date_text);
        values.bind(rite.place_placeholder(), place_text);
        values.bind("endnotes", self.endnotes.endnote_numbers(&event));

        let mut text = values.substitute(&template);
        if rite == Rite::Baptism && !event.description.is_empty() {
            text = format!("{} {}", text.trim_end(), event.description);
        }
        self.finish(session, text)
    }

    /// Sentence for a marriage or partnership within one family.
    ///
    /// `order` distinguishes the subject's first partner sentence from
    /// later ones ("also married"). `alternate_names` optionally replaces
    /// how the spouse's name is displayed; an unresolvable or unnamed
    /// spouse narrates under the translated unknown-partner name.
    pub fn marriage_sentence(
        &self,
        session: &mut NarrationSession,
        family: &Family,
        order: UnionOrder,
        alternate_names: Option<&dyn INameDisplay>,
    ) -> String {
        let person = match self.store.person(&session.subject) {
            Some(person) => person,
            None => return String::new(),
        };

        let name_display = alternate_names.unwrap_or(self.names);
        let spouse = facts::spouse_handle(family, &person.handle)
            .and_then(|handle| self.store.person(&handle))
            .map(|spouse| name_display.display(&spouse))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.locale.gettext(UNKNOWN_SPOUSE));

        let event = facts::marriage_event(self.store, family);
        let (date_text, place_text) = self.event_strings(event.as_ref());
        let has_date = !date_text.is_empty();
        let has_place = !place_text.is_empty();

        let tier = event
            .as_ref()
            .map(|event| presented_tier(classify_date(&event.date)))
            .unwrap_or(DateTier::Partial);
        let detail = match (has_date, has_place) {
            (true, true) => UnionDetail::DatePlace(tier),
            (true, false) => UnionDetail::DateOnly(tier),
            (false, true) => UnionDetail::PlaceOnly,
            (false, false) => UnionDetail::Neither,
        };
        let phrasing = if self.config.verbose {
            UnionPhrasing::Verbose {
                gender: person.gender.normalized(),
            }
        } else {
            UnionPhrasing::Succinct
        };
        let key: TemplateKey = UnionKey {
            kind: UnionKind::from_relation(family.relation),
            order,
            detail,
            phrasing,
        }
        .into();
        let template = match self.template_for(&key) {
            Some(template) => template,
            None => return String::new(),
        };
        debug!(session_id = %session.session_id, key = %key.id(), "partner template selected");

        let mut values = ValueMap::new();
        values.bind("spouse", spouse);
        values.bind("full_date", date_text.clone());
        values.bind("partial_date", date_text.clone());
        values.bind("modified_date", date_text);
        values.bind("place", place_text);
        values.bind(
            "endnotes",
            event
                .as_ref()
                .map(|event| self.endnotes.endnote_numbers(event))
                .unwrap_or_default(),
        );

        let text = values.substitute(&template);
        self.finish(session, text)
    }

    /// Sentence naming the subject's parents, empty when neither name is
    /// given. Tense follows whether the subject is probably alive.
    pub fn parentage_sentence(
        &self,
        session: &mut NarrationSession,
        father_name: Option<&str>,
        mother_name: Option<&str>,
    ) -> String {
        let person = match self.store.person(&session.subject) {
            Some(person) => person,
            None => return String::new(),
        };
        let father = father_name.filter(|name| !name.is_empty());
        let mother = mother_name.filter(|name| !name.is_empty());
        let parents = match (father, mother) {
            (Some(_), Some(_)) => ParentSet::Both,
            (Some(_), None) => ParentSet::FatherOnly,
            (None, Some(_)) => ParentSet::MotherOnly,
            (None, None) => return String::new(),
        };

        let form = if self.config.verbose {
            ParentageForm::Verbose {
                form: session.name_form(),
                tense: if session.alive {
                    Tense::Present
                } else {
                    Tense::Past
                },
            }
        } else {
            ParentageForm::Succinct
        };
        let key: TemplateKey = ParentageKey {
            parents,
            gender: person.gender.normalized(),
            form,
        }
        .into();
        let template = match self.template_for(&key) {
            Some(template) => template,
            None => return String::new(),
        };
        debug!(session_id = %session.session_id, key = %key.id(), "parentage template selected");

        let mut values = ValueMap::new();
        values.bind_subject(&session.first_name);
        values.bind("father", father.unwrap_or_default());
        values.bind("mother", mother.unwrap_or_default());
        let text = values.substitute(&template);
        self.finish(session, text)
    }

    /// Note text attached to the subject's baptism or christening, where
    /// witness lists are conventionally kept. Returned with a trailing
    /// separator, empty when there is nothing.
    pub fn witnesses_text(&self, session: &NarrationSession) -> String {
        let person = match self.store.person(&session.subject) {
            Some(person) => person,
            None => return String::new(),
        };
        let note = facts::primary_event_any(
            self.store,
            &person,
            &[EventKind::Baptism, EventKind::Christening],
        )
        .and_then(|event| facts::first_note_text(self.store, &event));
        match note {
            Some(text) => format!("{} ", text.trim_end()),
            None => String::new(),
        }
    }

    /// First note attached to the subject's christening event.
    pub fn christening_note_text(&self, session: &NarrationSession) -> Option<String> {
        let person = self.store.person(&session.subject)?;
        let event = facts::primary_event(self.store, &person, EventKind::Christening)?;
        facts::first_note_text(self.store, &event)
    }

    /// Displayed date and place for an event, seeded with the configured
    /// placeholder strings.
    ///
    /// The seeds participate in presence checks downstream: a host that
    /// configures a non-empty `empty_date` turns dateless facts into
    /// narrated sentences carrying that marker text.
    fn event_strings(&self, event: Option<&Event>) -> (String, String) {
        let mut date_text = self.config.empty_date.clone();
        let mut place_text = self.config.empty_place.clone();
        if let Some(event) = event {
            let rendered = if self.config.use_full_date {
                self.dates.display(&event.date)
            } else {
                self.dates.display_year(&event.date)
            };
            if !rendered.is_empty() {
                date_text = rendered;
            }
            let rendered_place = event
                .place
                .as_deref()
                .and_then(|handle| self.store.place(handle))
                .map(|place| self.places.display(&place, self.config.place_format))
                .unwrap_or_default();
            if !rendered_place.is_empty() {
                place_text = rendered_place;
            }
        }
        if self.locale.language() == HEBREW_LANGUAGE {
            date_text = hebrew_prefix(&date_text);
            place_text = hebrew_prefix(&place_text);
        }
        (date_text, place_text)
    }

    /// Resolve a key and pass the template through the host translation.
    ///
    /// Substitution happens after translation, so translated templates
    /// keep the same placeholder names. Selection only produces keys the
    /// catalog covers, so a miss here is a catalog gap worth flagging.
    fn template_for(&self, key: &TemplateKey) -> Option<String> {
        match self.catalog.resolve(key) {
            Some(template) => Some(self.locale.gettext(&template)),
            None => {
                warn!(key = %key.id(), "no template for selected key");
                None
            }
        }
    }

    fn phrasing(&self, gender: Gender, session: &NarrationSession) -> Phrasing {
        if self.config.verbose {
            Phrasing::Verbose {
                gender: gender.normalized(),
                form: session.name_form(),
            }
        } else {
            Phrasing::Succinct
        }
    }

    /// Close out a rendered sentence: advance the session and append the
    /// single separating space. Empty text passes through untouched so it
    /// never advances the name state.
    fn finish(&self, session: &mut NarrationSession, text: String) -> String {
        if text.is_empty() {
            return text;
        }
        if render::has_unresolved(&text) {
            warn!(
                session_id = %session.session_id,
                text = %text,
                "sentence rendered with unresolved placeholders"
            );
        }
        session.mark_sentence_rendered();
        format!("{} ", text.trim_end())
    }
}
