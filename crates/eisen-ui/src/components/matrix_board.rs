use eisen_core::editing::EditSession;
use eisen_core::quadrant::Quadrant;
use eisen_core::task::Task;
use uuid::Uuid;
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

use super::QuadrantSection;

#[derive(Properties, PartialEq)]
pub struct MatrixBoardProps {
  pub tasks:         Vec<Task>,
  pub editing:       Option<EditSession>,
  pub dragging_task: Option<Uuid>,
  pub drag_over:     Option<Quadrant>,
  pub on_drop: Callback<(Uuid, String)>,
  pub on_drag_start: Callback<Uuid>,
  pub on_drag_end:   Callback<()>,
  pub on_drag_over:
    Callback<Quadrant>,
  pub on_start_edit: Callback<Uuid>,
  pub on_edit_title_input:
    Callback<InputEvent>,
  pub on_edit_due_input:
    Callback<InputEvent>,
  pub on_save_edit:
    Callback<MouseEvent>,
  pub on_cancel_edit:
    Callback<MouseEvent>,
  pub on_delete:     Callback<Uuid>
}

#[function_component(MatrixBoard)]
pub fn matrix_board(
  props: &MatrixBoardProps
) -> Html {
  html! {
      <div class="matrix-board">
          {
              for Quadrant::all().into_iter().map(|quadrant| {
                  // buckets are re-derived from the store on every render
                  let cards: Vec<Task> = props
                      .tasks
                      .iter()
                      .filter(|task| task.quadrant == quadrant)
                      .cloned()
                      .collect();
                  let is_drop_hint = props.drag_over == Some(quadrant);

                  html! {
                      <QuadrantSection
                          quadrant={quadrant}
                          cards={cards}
                          editing={props.editing.clone()}
                          dragging_task={props.dragging_task}
                          is_drop_hint={is_drop_hint}
                          on_drop={props.on_drop.clone()}
                          on_drag_start={props.on_drag_start.clone()}
                          on_drag_end={props.on_drag_end.clone()}
                          on_drag_over={props.on_drag_over.clone()}
                          on_start_edit={props.on_start_edit.clone()}
                          on_edit_title_input={props.on_edit_title_input.clone()}
                          on_edit_due_input={props.on_edit_due_input.clone()}
                          on_save_edit={props.on_save_edit.clone()}
                          on_cancel_edit={props.on_cancel_edit.clone()}
                          on_delete={props.on_delete.clone()}
                      />
                  }
              })
          }
      </div>
  }
}
