//! Form orchestration: debounced validation, list inputs and submission.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use foodshare_client::{ApiError, EventApi};
use foodshare_form::{EventForm, FormConfig, FormError, MAX_IMAGE_SLOTS, SubmitPhase};
use foodshare_model::{
    ComunaCoordinates, ComunaImageCount, DayCount, Event, EventPage, EventSubmission,
    FieldFeedback, FieldName, FieldState, FoodTypeCount, ImageUpload, MonthDaypartCounts,
    ReferenceData, RegionsAndComunas, RegistrationResponse, SocialNetworkInput, SubmissionOutcome,
};

fn reference() -> ReferenceData {
    ReferenceData::new(
        RegionsAndComunas {
            regions: vec!["Arica y Parinacota".into(), "Valparaíso".into()],
            comunas: vec![
                vec!["Arica".into(), "Putre".into()],
                vec!["Valparaíso".into(), "Viña del Mar".into()],
            ],
        },
        vec!["Vegana".into(), "Mariscos".into()],
        vec!["facebook".into(), "instagram".into(), "otra".into()],
    )
}

fn form() -> EventForm {
    EventForm::new(reference(), FormConfig::default())
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn fill_valid(form: &mut EventForm, now: Instant) {
    let values = [
        (FieldName::Region, "Valparaíso"),
        (FieldName::Comuna, "Viña del Mar"),
        (FieldName::Name, "Junta de vecinos"),
        (FieldName::Email, "junta@example.cl"),
        (FieldName::StartDate, "2024-03-01 12:00"),
        (FieldName::EndDate, "2024-03-01 15:00"),
        (FieldName::FoodType, "Vegana"),
    ];
    for (field, value) in values {
        form.set_value(field, value, now).unwrap();
    }
    form.set_image(0, Some(ImageUpload::new("plato.jpg", 50_000)), now)
        .unwrap();
}

/// Backend double that records registrations.
struct FakeApi {
    outcome: Option<SubmissionOutcome>,
    received: Mutex<Vec<EventSubmission>>,
}

impl FakeApi {
    fn answering(outcome: SubmissionOutcome) -> Self {
        Self {
            outcome: Some(outcome),
            received: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            outcome: None,
            received: Mutex::new(Vec::new()),
        }
    }
}

impl EventApi for FakeApi {
    fn regions_and_comunas(&self) -> foodshare_client::Result<RegionsAndComunas> {
        Ok(RegionsAndComunas::default())
    }
    fn food_types(&self) -> foodshare_client::Result<Vec<String>> {
        Ok(Vec::new())
    }
    fn social_networks(&self) -> foodshare_client::Result<Vec<String>> {
        Ok(Vec::new())
    }
    fn events(&self, _limit: Option<u64>, _offset: u64) -> foodshare_client::Result<EventPage> {
        Ok(EventPage::default())
    }
    fn event(&self, _id: u64) -> foodshare_client::Result<Option<Event>> {
        Ok(None)
    }
    fn image_count_per_comuna(&self) -> foodshare_client::Result<Vec<ComunaImageCount>> {
        Ok(Vec::new())
    }
    fn events_of_comuna(&self, _comuna: &str) -> foodshare_client::Result<Vec<Event>> {
        Ok(Vec::new())
    }
    fn events_per_day(&self) -> foodshare_client::Result<Vec<DayCount>> {
        Ok(Vec::new())
    }
    fn events_per_food_type(&self) -> foodshare_client::Result<Vec<FoodTypeCount>> {
        Ok(Vec::new())
    }
    fn events_by_month_and_daypart(&self) -> foodshare_client::Result<MonthDaypartCounts> {
        Ok(MonthDaypartCounts::default())
    }
    fn comuna_coordinates(&self) -> foodshare_client::Result<Vec<ComunaCoordinates>> {
        Ok(Vec::new())
    }
    fn register(&self, submission: &EventSubmission) -> foodshare_client::Result<SubmissionOutcome> {
        self.received.lock().unwrap().push(submission.clone());
        self.outcome.clone().ok_or(ApiError::Status {
            url: "http://localhost/cgi-bin/register_event.py".into(),
            status: 502,
        })
    }
}

#[test]
fn new_form_is_untested_with_one_image_slot() {
    let form = form();
    assert_eq!(form.image_slot_count(), 1);
    assert!(form.social_states().is_empty());
    assert!(
        form.field_states()
            .iter()
            .flat_map(|(_, states)| states)
            .all(FieldState::is_untested)
    );
    assert_eq!(form.phase(), SubmitPhase::Editing);
}

#[test]
fn typing_burst_validates_once_after_quiet_period() {
    let mut form = form();
    let start = Instant::now();

    form.set_value(FieldName::Name, "A", start).unwrap();
    form.set_value(FieldName::Name, "An", start + ms(100)).unwrap();
    form.set_value(FieldName::Name, "Ana", start + ms(200)).unwrap();

    assert!(form.tick(start + ms(600)).is_empty());
    assert_eq!(form.tick(start + ms(700)), [FieldName::Name]);
    assert_eq!(form.state(FieldName::Name), Some(&FieldState::Valid));
    assert!(form.tick(start + ms(5000)).is_empty());
}

#[test]
fn pass_covers_every_field_touched_in_the_burst() {
    let mut form = form();
    let start = Instant::now();

    form.set_value(FieldName::Email, "bad", start).unwrap();
    form.set_value(FieldName::Comuna, "Putre", start + ms(100))
        .unwrap();

    let fields = form.tick(start + ms(600));
    assert_eq!(
        fields,
        [FieldName::Region, FieldName::Comuna, FieldName::Email]
    );
    assert_eq!(
        form.state(FieldName::Comuna),
        Some(&FieldState::invalid("Chequear región."))
    );
    assert_eq!(
        form.state(FieldName::Email),
        Some(&FieldState::invalid("Formato de email no válido."))
    );
    assert!(form.state(FieldName::Name).unwrap().is_untested());
}

#[test]
fn changing_start_date_revalidates_end_date() {
    let mut form = form();
    let start = Instant::now();
    form.set_value(FieldName::StartDate, "2024-03-01 12:00", start)
        .unwrap();
    form.set_value(FieldName::EndDate, "2024-03-01 15:00", start)
        .unwrap();
    form.tick(start + ms(500));
    assert_eq!(form.state(FieldName::EndDate), Some(&FieldState::Valid));

    form.set_value(FieldName::StartDate, "2024-03-01 16:00", start + ms(1000))
        .unwrap();
    form.tick(start + ms(1500));
    assert_eq!(
        form.state(FieldName::EndDate),
        Some(&FieldState::invalid(
            "El término debe ser después del inicio del evento."
        ))
    );
}

#[test]
fn list_fields_are_not_text() {
    let mut form = form();
    assert!(matches!(
        form.set_value(FieldName::Images, "x", Instant::now()),
        Err(FormError::ListField(FieldName::Images))
    ));
}

#[test]
fn image_slots_between_one_and_five() {
    let mut form = form();
    assert!(!form.remove_image_slot(0).unwrap());
    for expected in 1..MAX_IMAGE_SLOTS {
        assert_eq!(form.add_image_slot().unwrap(), expected);
    }
    assert!(matches!(
        form.add_image_slot(),
        Err(FormError::ImageSlotLimit { max: 5 })
    ));
    assert!(form.remove_image_slot(4).unwrap());
    assert_eq!(form.image_slot_count(), 4);
    assert_eq!(form.image_states().len(), 4);
    assert!(matches!(
        form.set_image(9, None, Instant::now()),
        Err(FormError::NoSuchImageSlot { index: 9 })
    ));
}

#[test]
fn fill_restores_a_draft_with_untested_states() {
    let mut form = form();
    let draft = EventSubmission {
        region: "Valparaíso".into(),
        images: vec![Some(ImageUpload::new("a.jpg", 6_000)), None],
        social_networks: vec![SocialNetworkInput::new("instagram", "https://instagram.com/x")],
        ..EventSubmission::default()
    };
    form.fill(draft).unwrap();

    assert_eq!(form.value(FieldName::Region), Some("Valparaíso"));
    assert_eq!(form.image_states().len(), 2);
    assert_eq!(form.social_states(), [FieldState::Untested]);
    assert!(!form.has_pending_validation());

    let too_many = EventSubmission {
        images: vec![None; MAX_IMAGE_SLOTS + 1],
        ..EventSubmission::default()
    };
    assert!(matches!(
        form.fill(too_many),
        Err(FormError::ImageSlotLimit { max: 5 })
    ));

    form.fill(EventSubmission::default()).unwrap();
    assert_eq!(form.image_slot_count(), 1);
}

#[test]
fn fill_rejects_unknown_and_repeated_networks() {
    let mut form = form();
    let unknown = EventSubmission {
        social_networks: vec![SocialNetworkInput::new("myspace", "https://myspace.com/junta")],
        ..EventSubmission::default()
    };
    assert!(matches!(
        form.fill(unknown),
        Err(FormError::UnknownNetwork(network)) if network == "myspace"
    ));

    let repeated = EventSubmission {
        social_networks: vec![
            SocialNetworkInput::new("instagram", "https://instagram.com/a"),
            SocialNetworkInput::new("instagram", "https://instagram.com/b"),
        ],
        ..EventSubmission::default()
    };
    assert!(matches!(
        form.fill(repeated),
        Err(FormError::DuplicateNetwork(network)) if network == "instagram"
    ));
    assert!(form.submission().social_networks.is_empty());
}

#[test]
fn social_inputs_are_unique_per_network() {
    let mut form = form();
    assert!(form.add_social_network("instagram").unwrap());
    assert!(!form.add_social_network("instagram").unwrap());
    assert!(matches!(
        form.add_social_network("myspace"),
        Err(FormError::UnknownNetwork(_))
    ));
    assert_eq!(form.submission().social_networks[0].url, "https://");
    assert!(matches!(
        form.set_social_url("facebook", "https://facebook.com/x", Instant::now()),
        Err(FormError::NetworkNotAdded(_))
    ));
    assert!(form.remove_social_network("instagram").unwrap());
    assert!(!form.remove_social_network("instagram").unwrap());
    assert!(form.social_states().is_empty());
}

#[test]
fn prefilled_social_input_fails_until_completed() {
    let mut form = form();
    let now = Instant::now();
    fill_valid(&mut form, now);
    form.add_social_network("facebook").unwrap();
    assert!(!form.validate());
    assert!(!form.social_states()[0].is_valid());

    form.set_social_url("facebook", "https://facebook.com/junta", now)
        .unwrap();
    assert!(form.validate());
    assert!(!form.has_pending_validation());
}

#[test]
fn default_dates_are_three_hours_apart() {
    let mut form = form();
    let now = NaiveDate::from_ymd_opt(2024, 12, 31)
        .unwrap()
        .and_hms_opt(22, 30, 0)
        .unwrap();
    form.default_dates(now).unwrap();
    assert_eq!(form.value(FieldName::StartDate), Some("2024-12-31 22:30"));
    assert_eq!(form.value(FieldName::EndDate), Some("2025-01-01 01:30"));
}

#[test]
fn out_of_range_duration_falls_back_to_three_hours() {
    let config = FormConfig {
        default_duration_hours: i64::MAX,
        ..FormConfig::default()
    };
    let mut form = EventForm::new(reference(), config);
    let now = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    form.default_dates(now).unwrap();
    assert_eq!(form.value(FieldName::EndDate), Some("2024-03-01 15:00"));
}

#[test]
fn comuna_options_follow_region() {
    let mut form = form();
    assert!(form.comuna_options().is_empty());
    form.set_value(FieldName::Region, "Valparaíso", Instant::now())
        .unwrap();
    assert_eq!(form.comuna_options(), ["Valparaíso", "Viña del Mar"]);
}

#[test]
fn invalid_form_cannot_request_submission() {
    let mut form = form();
    assert!(!form.request_submit().unwrap());
    assert_eq!(form.phase(), SubmitPhase::Editing);
    assert_eq!(
        form.state(FieldName::Region),
        Some(&FieldState::invalid("Debe seleccionar una región."))
    );
    assert_eq!(
        form.image_states(),
        [FieldState::invalid("Debe subir una imagen.")]
    );
}

#[test]
fn confirmed_submission_is_stored() {
    let mut form = form();
    fill_valid(&mut form, Instant::now());

    assert!(form.request_submit().unwrap());
    assert_eq!(form.phase(), SubmitPhase::AwaitingConfirmation);
    assert!(matches!(
        form.request_submit(),
        Err(FormError::OutOfPhase { .. })
    ));

    let mut response = RegistrationResponse::new();
    response.insert(FieldName::Name, FieldFeedback::valid());
    let api = FakeApi::answering(SubmissionOutcome::Envelope(true, response));
    let outcome = form.confirm(&api).unwrap();

    assert!(outcome.saved());
    assert_eq!(form.phase(), SubmitPhase::Submitted);
    assert_eq!(api.received.lock().unwrap()[0].comuna, "Viña del Mar");

    form.reset();
    assert_eq!(form.phase(), SubmitPhase::Editing);
    assert_eq!(form.value(FieldName::Name), Some(""));
}

#[test]
fn inputs_are_locked_while_awaiting_confirmation() {
    let mut form = form();
    let now = Instant::now();
    fill_valid(&mut form, now);
    assert!(form.request_submit().unwrap());

    assert!(matches!(
        form.set_value(FieldName::Email, "not-an-email", now),
        Err(FormError::OutOfPhase { .. })
    ));
    assert!(matches!(
        form.set_image(0, None, now),
        Err(FormError::OutOfPhase { .. })
    ));
    assert!(form.add_image_slot().is_err());
    assert!(form.remove_image_slot(0).is_err());
    assert!(form.add_social_network("instagram").is_err());
    assert!(form.remove_social_network("instagram").is_err());
    assert!(form.set_social_url("instagram", "https://instagram.com/x", now).is_err());

    let mut response = RegistrationResponse::new();
    response.insert(FieldName::Email, FieldFeedback::valid());
    let api = FakeApi::answering(SubmissionOutcome::Envelope(true, response));
    form.confirm(&api).unwrap();
    assert_eq!(api.received.lock().unwrap()[0].email, "junta@example.cl");

    assert!(form.set_value(FieldName::Email, "otro@example.cl", now).is_err());
}

#[test]
fn cancel_returns_to_editing() {
    let mut form = form();
    fill_valid(&mut form, Instant::now());
    form.request_submit().unwrap();
    form.cancel_submit().unwrap();
    assert_eq!(form.phase(), SubmitPhase::Editing);
    assert!(form.cancel_submit().is_err());
}

#[test]
fn server_rejection_maps_onto_states() {
    let mut form = form();
    let now = Instant::now();
    fill_valid(&mut form, now);
    form.add_image_slot().unwrap();
    form.set_image(1, Some(ImageUpload::new("otro.png", 40_000)), now)
        .unwrap();
    form.request_submit().unwrap();

    let mut response = RegistrationResponse::new();
    response.insert(FieldName::Region, FieldFeedback::valid());
    response.insert(
        FieldName::Email,
        FieldFeedback::Single(false, "Formato de email no válido.".into()),
    );
    response.insert(
        FieldName::Images,
        FieldFeedback::Group(
            false,
            vec![
                (true, String::new()),
                (false, "Extensión del archivo debe ser (.jpg .jpeg .png).".into()),
            ],
        ),
    );
    let api = FakeApi::answering(SubmissionOutcome::Bare(response));
    let outcome = form.confirm(&api).unwrap();

    assert!(!outcome.saved());
    assert_eq!(form.phase(), SubmitPhase::Editing);
    assert_eq!(
        form.state(FieldName::Email),
        Some(&FieldState::invalid("Formato de email no válido."))
    );
    assert_eq!(form.image_states()[0], FieldState::Valid);
    assert!(!form.image_states()[1].is_valid());
}

#[test]
fn network_failure_returns_to_editing() {
    let mut form = form();
    fill_valid(&mut form, Instant::now());
    form.request_submit().unwrap();

    let err = form.confirm(&FakeApi::failing()).unwrap_err();
    assert!(matches!(err, FormError::Api(ApiError::Status { status: 502, .. })));
    assert_eq!(form.phase(), SubmitPhase::Editing);
}

#[test]
fn states_snapshot() {
    let mut form = form();
    let now = Instant::now();
    form.set_value(FieldName::Region, "Valparaíso", now).unwrap();
    form.set_value(FieldName::Comuna, "Putre", now).unwrap();
    form.tick(now + ms(500));

    let states: Vec<_> = form
        .field_states()
        .into_iter()
        .filter(|(field, _)| matches!(field, FieldName::Region | FieldName::Comuna))
        .collect();
    insta::assert_json_snapshot!(states, @r#"
    [
      [
        "region",
        [
          {
            "state": "valid"
          }
        ]
      ],
      [
        "comuna",
        [
          {
            "state": "invalid",
            "message": "La comuna seleccionada no es una opción válida."
          }
        ]
      ]
    ]
    "#);
}
