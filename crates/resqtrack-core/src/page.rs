// ── Page surface ──
//
// The controller never looks anything up globally: it is handed a
// `Surface` and only touches the page through it. `Page` is the headless
// implementation used by the CLI and the tests.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Mutex;

use crate::notify::Toast;
use crate::view::{Html, escape};

/// Element ids of the admin dashboard.
pub mod ids {
    // Table containers
    pub const CASES_TABLE: &str = "casesTable";
    pub const DONATIONS_TABLE: &str = "donationsTable";
    pub const HOSPITALS_TABLE: &str = "hospitalsTable";
    pub const SEARCH_RESULTS: &str = "hospitalSearchResults";

    // Stats panel
    pub const TOTAL_CASES: &str = "totalCases";
    pub const TOTAL_DONATIONS: &str = "totalDonations";
    pub const TOTAL_HOSPITALS: &str = "totalHospitals";
    pub const TOTAL_AMOUNT: &str = "totalAmount";

    // Status modal and its form
    pub const STATUS_MODAL: &str = "statusModal";
    pub const STATUS_FORM: &str = "statusUpdateForm";
    pub const UPDATE_CASE_ID: &str = "updateCaseId";
    pub const UPDATE_STATUS: &str = "updateStatus";
    pub const UPDATE_ASSIGNED_HOSPITAL: &str = "updateAssignedHospital";

    // Add-hospital form
    pub const ADD_HOSPITAL_FORM: &str = "addHospitalForm";
    pub const HOSPITAL_NAME: &str = "hospitalName";
    pub const HOSPITAL_ADDRESS: &str = "hospitalAddress";
    pub const HOSPITAL_PHONE: &str = "hospitalPhone";
    pub const HOSPITAL_LOCATION: &str = "hospitalLocation";
    pub const HOSPITAL_LAT: &str = "hospitalLat";
    pub const HOSPITAL_LON: &str = "hospitalLon";

    // Hospital search
    pub const HOSPITAL_CITY: &str = "hospitalCity";
}

/// The page capabilities the controller needs.
///
/// Methods take `&self`: several fetches may complete and paint while
/// others are still in flight.
pub trait Surface {
    /// Replace a container's content wholesale.
    fn replace_content(&self, container: &str, html: Html);

    /// Set an element's text content.
    fn set_text(&self, element: &str, text: &str);

    /// Current value of an input; empty when the input is unknown.
    fn input_value(&self, input: &str) -> String;

    fn set_input_value(&self, input: &str, value: &str);

    fn show_modal(&self, modal: &str);

    fn hide_modal(&self, modal: &str);

    /// Ids of the modals currently shown.
    fn visible_modals(&self) -> Vec<String>;

    /// Clear every input of a form.
    fn reset_form(&self, form: &str);
}

impl<S: Surface + ?Sized> Surface for &S {
    fn replace_content(&self, container: &str, html: Html) {
        (**self).replace_content(container, html);
    }
    fn set_text(&self, element: &str, text: &str) {
        (**self).set_text(element, text);
    }
    fn input_value(&self, input: &str) -> String {
        (**self).input_value(input)
    }
    fn set_input_value(&self, input: &str, value: &str) {
        (**self).set_input_value(input, value);
    }
    fn show_modal(&self, modal: &str) {
        (**self).show_modal(modal);
    }
    fn hide_modal(&self, modal: &str) {
        (**self).hide_modal(modal);
    }
    fn visible_modals(&self) -> Vec<String> {
        (**self).visible_modals()
    }
    fn reset_form(&self, form: &str) {
        (**self).reset_form(form);
    }
}

// ── Headless page ────────────────────────────────────────────────

#[derive(Debug, Default)]
struct PageState {
    containers: BTreeMap<String, Html>,
    texts: BTreeMap<String, String>,
    inputs: BTreeMap<String, String>,
    /// form id → input ids, in display order
    forms: BTreeMap<String, Vec<String>>,
    modals: BTreeMap<String, Modal>,
}

#[derive(Debug, Default)]
struct Modal {
    visible: bool,
    form: Option<String>,
}

/// In-memory page: containers, text elements, inputs, forms and modals.
#[derive(Debug, Default)]
pub struct Page {
    state: Mutex<PageState>,
}

impl Page {
    /// The admin dashboard layout: stats panel, three tables, the search
    /// results area, the status modal, and the add-hospital form.
    pub fn admin() -> Self {
        let mut state = PageState::default();

        for id in [
            ids::TOTAL_CASES,
            ids::TOTAL_DONATIONS,
            ids::TOTAL_HOSPITALS,
            ids::TOTAL_AMOUNT,
        ] {
            state.texts.insert(id.into(), String::new());
        }
        for id in [
            ids::CASES_TABLE,
            ids::DONATIONS_TABLE,
            ids::HOSPITALS_TABLE,
            ids::SEARCH_RESULTS,
        ] {
            state.containers.insert(id.into(), Html::default());
        }

        let forms: [(&str, &[&str]); 2] = [
            (
                ids::STATUS_FORM,
                &[
                    ids::UPDATE_CASE_ID,
                    ids::UPDATE_STATUS,
                    ids::UPDATE_ASSIGNED_HOSPITAL,
                ],
            ),
            (
                ids::ADD_HOSPITAL_FORM,
                &[
                    ids::HOSPITAL_NAME,
                    ids::HOSPITAL_ADDRESS,
                    ids::HOSPITAL_PHONE,
                    ids::HOSPITAL_LOCATION,
                    ids::HOSPITAL_LAT,
                    ids::HOSPITAL_LON,
                ],
            ),
        ];
        for (form, inputs) in forms {
            for input in inputs {
                state.inputs.insert((*input).into(), String::new());
            }
            state
                .forms
                .insert(form.into(), inputs.iter().map(|i| (*i).to_owned()).collect());
        }
        state.inputs.insert(ids::HOSPITAL_CITY.into(), String::new());

        state.modals.insert(
            ids::STATUS_MODAL.into(),
            Modal {
                visible: false,
                form: Some(ids::STATUS_FORM.into()),
            },
        );

        Self {
            state: Mutex::new(state),
        }
    }

    /// Register a modal region (hidden).
    pub fn add_modal(&self, modal: &str) {
        self.lock().modals.entry(modal.into()).or_default();
    }

    /// Current content of a container.
    pub fn content(&self, container: &str) -> Option<Html> {
        self.lock().containers.get(container).cloned()
    }

    /// Current text of an element.
    pub fn text(&self, element: &str) -> Option<String> {
        self.lock().texts.get(element).cloned()
    }

    pub fn is_modal_visible(&self, modal: &str) -> bool {
        self.lock().modals.get(modal).is_some_and(|m| m.visible)
    }

    /// Serialize the page as a standalone HTML document, with `toasts`
    /// appended as toast elements.
    pub fn to_document(&self, title: &str, toasts: &[Toast]) -> String {
        let state = self.lock();
        let mut out = String::new();
        let _ = write!(
            out,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{}</title>\n</head>\n<body>\n",
            escape(title)
        );

        out.push_str("<section class=\"stats\">\n");
        for (id, text) in &state.texts {
            let _ = writeln!(out, "<span id=\"{}\">{}</span>", escape(id), escape(text));
        }
        out.push_str("</section>\n");

        for (id, html) in &state.containers {
            let _ = writeln!(out, "<div id=\"{}\">{html}</div>", escape(id));
        }

        let modal_forms: Vec<&str> = state
            .modals
            .values()
            .filter_map(|m| m.form.as_deref())
            .collect();
        for (form, inputs) in &state.forms {
            if !modal_forms.contains(&form.as_str()) {
                render_form(&mut out, &state, form, inputs);
            }
        }

        for (id, modal) in &state.modals {
            let display = if modal.visible { "flex" } else { "none" };
            let _ = writeln!(
                out,
                "<div id=\"{}\" class=\"modal\" style=\"display: {display}\">",
                escape(id)
            );
            if let Some(form) = &modal.form {
                if let Some(inputs) = state.forms.get(form) {
                    render_form(&mut out, &state, form, inputs);
                }
            }
            out.push_str("</div>\n");
        }

        for toast in toasts {
            let _ = writeln!(
                out,
                "<div class=\"toast toast-{} show\" data-toast-id=\"{}\">{}</div>",
                toast.severity,
                toast.id,
                escape(&toast.message)
            );
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PageState> {
        self.state.lock().expect("page lock poisoned")
    }
}

fn render_form(out: &mut String, state: &PageState, form: &str, inputs: &[String]) {
    let _ = writeln!(out, "<form id=\"{}\">", escape(form));
    for input in inputs {
        let value = state.inputs.get(input).map_or("", String::as_str);
        let _ = writeln!(
            out,
            "<input id=\"{}\" name=\"{}\" value=\"{}\">",
            escape(input),
            escape(input),
            escape(value)
        );
    }
    out.push_str("</form>\n");
}

impl Surface for Page {
    fn replace_content(&self, container: &str, html: Html) {
        self.lock().containers.insert(container.into(), html);
    }

    fn set_text(&self, element: &str, text: &str) {
        self.lock().texts.insert(element.into(), text.into());
    }

    fn input_value(&self, input: &str) -> String {
        self.lock().inputs.get(input).cloned().unwrap_or_default()
    }

    fn set_input_value(&self, input: &str, value: &str) {
        self.lock().inputs.insert(input.into(), value.into());
    }

    fn show_modal(&self, modal: &str) {
        self.lock().modals.entry(modal.into()).or_default().visible = true;
    }

    fn hide_modal(&self, modal: &str) {
        if let Some(m) = self.lock().modals.get_mut(modal) {
            m.visible = false;
        }
    }

    fn visible_modals(&self) -> Vec<String> {
        self.lock()
            .modals
            .iter()
            .filter(|(_, m)| m.visible)
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn reset_form(&self, form: &str) {
        let mut state = self.lock();
        let Some(inputs) = state.forms.get(form).cloned() else {
            return;
        };
        for input in inputs {
            state.inputs.insert(input, String::new());
        }
    }
}
