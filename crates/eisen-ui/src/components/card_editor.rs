use eisen_core::editing::EditSession;
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
pub struct CardEditorProps {
  pub session:   EditSession,
  pub on_title_input:
    Callback<InputEvent>,
  pub on_due_input:
    Callback<InputEvent>,
  pub on_save:   Callback<MouseEvent>,
  pub on_cancel: Callback<MouseEvent>
}

#[function_component(CardEditor)]
pub fn card_editor(
  props: &CardEditorProps
) -> Html {
  html! {
      <div class="task-card editing">
          <input
              class="editor-input"
              value={props.session.draft.title.clone()}
              placeholder="Task title..."
              oninput={props.on_title_input.clone()}
          />
          <input
              class="editor-input"
              type="date"
              value={props.session.draft.due.clone()}
              oninput={props.on_due_input.clone()}
          />
          <div class="editor-actions">
              <button class="btn" onclick={props.on_cancel.clone()}>{ "Cancel" }</button>
              <button class="btn primary" onclick={props.on_save.clone()}>{ "Save" }</button>
          </div>
      </div>
  }
}
