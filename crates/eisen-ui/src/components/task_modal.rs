use eisen_core::editing::TaskDraft;
use web_sys::{
  InputEvent,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
  pub draft:     TaskDraft,
  pub error:     Option<String>,
  pub on_title_input:
    Callback<InputEvent>,
  pub on_due_input:
    Callback<InputEvent>,
  pub on_submit: Callback<MouseEvent>,
  pub on_cancel: Callback<MouseEvent>
}

#[function_component(TaskModal)]
pub fn task_modal(
  props: &TaskModalProps
) -> Html {
  html! {
      <div class="modal-backdrop">
          <div class="modal">
              <div class="header">{ "Create New Task" }</div>
              <div class="content">
                  {
                      if let Some(err) = props.error.clone() {
                          html! { <div class="form-error">{ err }</div> }
                      } else {
                          html! {}
                      }
                  }
                  <div class="field">
                      <label>{ "Task Title" }</label>
                      <input
                          value={props.draft.title.clone()}
                          placeholder="Enter task title..."
                          oninput={props.on_title_input.clone()}
                      />
                  </div>
                  <div class="field">
                      <label>{ "Due Date" }</label>
                      <input
                          type="date"
                          value={props.draft.due.clone()}
                          oninput={props.on_due_input.clone()}
                      />
                  </div>
                  <div class="footer">
                      <button
                          type="button"
                          class="btn"
                          onclick={props.on_cancel.clone()}
                      >
                          { "Cancel" }
                      </button>
                      <button
                          type="button"
                          class="btn primary"
                          onclick={props.on_submit.clone()}
                      >
                          { "Create Task" }
                      </button>
                  </div>
              </div>
          </div>
      </div>
  }
}
