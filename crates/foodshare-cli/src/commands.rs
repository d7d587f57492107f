use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::de::DeserializeOwned;
use tracing::{info, info_span};

use foodshare_client::{EventApi, HttpApi, fetch_reference_data};
use foodshare_display::{
    EventDetail, EventTable, MapView, build_markers, latest_events, load_dashboard, load_map,
    parse_event_id,
};
use foodshare_form::{EventForm, FormError};
use foodshare_match::{similarity, strings_are_similar, strip_diacritics};
use foodshare_model::{ComunaCoordinates, ReferenceData};

use foodshare_cli::draft::load_submission;
use foodshare_cli::settings::Settings;

use crate::cli::{
    EventArgs, EventsArgs, MapArgs, SimilarityArgs, StatsArgs, SubmitArgs, ValidateArgs,
};
use crate::output::{
    print_dashboard, print_event_detail, print_event_rows, print_field_states, print_map,
    print_portrait_rows,
};

fn http_api(settings: &Settings) -> Result<HttpApi> {
    HttpApi::with_timeout(&settings.api.base_url, settings.api.timeout())
        .with_context(|| format!("build API client for {}", settings.api.base_url))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))
}

fn fetch_reference(api: &HttpApi) -> Result<ReferenceData> {
    fetch_reference_data(api).map_err(|err| {
        let message = err.user_message().to_string();
        anyhow::Error::new(err).context(message)
    })
}

/// Validate a draft; returns whether it passes.
pub fn run_validate(args: &ValidateArgs, settings: &Settings) -> Result<bool> {
    let _span = info_span!("validate", file = %args.file.display()).entered();
    let submission = load_submission(&args.file)?;
    let reference = match &args.reference {
        Some(path) => read_json(path).context("load reference data")?,
        None => fetch_reference(&http_api(settings)?)?,
    };
    let mut form = EventForm::new(reference, settings.form.form_config());
    form.fill(submission).context("load draft")?;
    let valid = form.validate();
    print_field_states(&form.field_states());
    info!(valid, "draft validated");
    Ok(valid)
}

/// Validate, confirm and register a draft; returns whether it was stored.
pub fn run_submit(args: &SubmitArgs, settings: &Settings) -> Result<bool> {
    let _span = info_span!("submit", file = %args.file.display()).entered();
    let submission = load_submission(&args.file)?;
    let api = http_api(settings)?;
    let reference = fetch_reference(&api)?;
    let mut form = EventForm::new(reference, settings.form.form_config());
    form.fill(submission).context("load draft")?;

    if !form.request_submit()? {
        print_field_states(&form.field_states());
        println!("El formulario tiene errores; corríjalos antes de enviar.");
        return Ok(false);
    }
    if !args.yes && !ask_confirmation()? {
        form.cancel_submit()?;
        println!("Envío cancelado.");
        return Ok(false);
    }

    let outcome = match form.confirm(&api) {
        Ok(outcome) => outcome,
        Err(FormError::Api(err)) => {
            let message = err.user_message().to_string();
            return Err(anyhow::Error::new(err).context(message));
        }
        Err(err) => return Err(err.into()),
    };
    print_field_states(&form.field_states());
    if outcome.saved() {
        println!("Evento registrado. ¡Gracias por compartir!");
    } else {
        println!("El servidor rechazó el evento.");
    }
    Ok(outcome.saved())
}

fn ask_confirmation() -> Result<bool> {
    print!("¿Confirma que desea registrar este evento? [s/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    ))
}

pub fn run_events(args: &EventsArgs, settings: &Settings) -> Result<()> {
    let api = http_api(settings)?;
    let mut table = EventTable::load(&api, settings.paginator()).context("load events")?;
    if table.count() == 0 {
        println!("No hay eventos registrados.");
        return Ok(());
    }
    let page = args.page - 1;
    if page >= table.page_count() {
        bail!(
            "page {} out of range, there are {} pages",
            args.page,
            table.page_count()
        );
    }
    table.select_page(&api, page).context("load events")?;
    info!(page = args.page, rows = table.events().len(), "events listed");
    print_event_rows(
        &table.rows(&settings.api.base_url),
        table.current_page() + 1,
        table.page_count(),
        table.count(),
    );
    Ok(())
}

/// Event id from a bare id or from a link carrying `event-id`.
fn event_id(value: &str) -> Option<u64> {
    match value.parse::<u64>() {
        Ok(id) => Some(id).filter(|id| *id != 0),
        Err(_) => parse_event_id(value.rsplit_once('?').map_or(value, |(_, query)| query)),
    }
}

pub fn run_event(args: &EventArgs, settings: &Settings) -> Result<()> {
    let id = event_id(&args.event).ok_or_else(|| anyhow!("no event id in {:?}", args.event))?;
    let api = http_api(settings)?;
    let event = api
        .event(id)
        .context("load event")?
        .ok_or_else(|| anyhow!("event {id} not found"))?;
    print_event_detail(&EventDetail::from_event(&event, &settings.api.base_url));
    Ok(())
}

pub fn run_latest(settings: &Settings) -> Result<()> {
    let api = http_api(settings)?;
    let rows = latest_events(&api, &settings.api.base_url, settings.display.latest_count)
        .context("load latest events")?;
    print_portrait_rows(&rows);
    Ok(())
}

pub fn run_stats(args: &StatsArgs, settings: &Settings) -> Result<()> {
    let api = http_api(settings)?;
    let dashboard = load_dashboard(&api).context("load statistics")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print_dashboard(&dashboard);
    }
    Ok(())
}

pub fn run_map(args: &MapArgs, settings: &Settings) -> Result<()> {
    let api = http_api(settings)?;
    let config = settings.map_config();
    let view = match &args.coordinates {
        Some(path) => {
            let coordinates: Vec<ComunaCoordinates> =
                read_json(path).context("load coordinates")?;
            let counts = api
                .image_count_per_comuna()
                .context("load image counts")?;
            MapView {
                center: (config.center_lat, config.center_lng),
                zoom: config.zoom,
                markers: build_markers(&coordinates, &counts, config.threshold),
            }
        }
        None => load_map(&api, &config).context("load map")?,
    };
    info!(markers = view.markers.len(), "map built");
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_map(&view);
    }
    Ok(())
}

/// Print the score of two names and whether they count as similar.
pub fn run_similarity(args: &SimilarityArgs, settings: &Settings) {
    let threshold = args
        .threshold
        .unwrap_or(settings.form.similarity_threshold);
    let score = similarity(&strip_diacritics(&args.first), &strip_diacritics(&args.second));
    let verdict = if strings_are_similar(&args.first, &args.second, threshold) {
        "similares"
    } else {
        "distintos"
    };
    println!("{score:.4} ({verdict}, umbral {threshold})");
}
