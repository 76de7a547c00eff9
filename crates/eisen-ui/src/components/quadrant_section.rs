use eisen_core::editing::EditSession;
use eisen_core::quadrant::Quadrant;
use eisen_core::task::Task;
use uuid::Uuid;
use web_sys::{
  DragEvent,
  InputEvent,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::{
  CardEditor,
  TaskCard
};

#[derive(Properties, PartialEq)]
pub struct QuadrantSectionProps {
  pub quadrant:      Quadrant,
  pub cards:         Vec<Task>,
  pub editing:       Option<EditSession>,
  pub dragging_task: Option<Uuid>,
  pub is_drop_hint:  bool,
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

#[function_component(QuadrantSection)]
pub fn quadrant_section(
  props: &QuadrantSectionProps
) -> Html {
  let quadrant = props.quadrant;

  let ondragover = {
    let on_drag_over =
      props.on_drag_over.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        event.stop_propagation();
        on_drag_over.emit(quadrant);
      }
    )
  };

  let ondragenter = {
    let on_drag_over =
      props.on_drag_over.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        event.stop_propagation();
        on_drag_over.emit(quadrant);
      }
    )
  };

  let ondrop = {
    let on_drop = props.on_drop.clone();
    let on_drag_end =
      props.on_drag_end.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        event.stop_propagation();
        if let Some(data_transfer) =
          event.data_transfer()
        {
          match data_transfer
            .get_data("text/plain")
          {
            | Ok(raw_uuid) => {
              if let Ok(uuid) =
                Uuid::parse_str(
                  raw_uuid.trim()
                )
              {
                on_drop.emit((
                  uuid,
                  quadrant
                    .as_key()
                    .to_string()
                ));
              } else {
                tracing::warn!(
                  raw_uuid,
                  "failed to parse \
                   dragged task uuid"
                );
              }
            }
            | Err(error) => {
              tracing::warn!(
                ?error,
                "failed reading drag \
                 data"
              )
            }
          }
        }
        on_drag_end.emit(());
      }
    )
  };

  html! {
      <div class={classes!("quadrant", quadrant.accent_class(), props.is_drop_hint.then_some("drop-hint"))} {ondragover} {ondragenter} {ondrop}>
          <div class="quadrant-header">
              <span class="quadrant-title">{ quadrant.title() }</span>
              <span class="badge">{ props.cards.len() }</span>
          </div>
          <div class="quadrant-subtitle">{ quadrant.description() }</div>
          <div class="quadrant-body">
              {
                  if props.cards.is_empty() {
                      html! { <div class="quadrant-empty">{ "No tasks" }</div> }
                  } else {
                      html! {
                          <>
                              {
                                  for props.cards.iter().map(|task| {
                                      let task_id = task.uuid;
                                      let session = props
                                          .editing
                                          .as_ref()
                                          .filter(|session| session.task == task_id);

                                      if let Some(session) = session {
                                          html! {
                                              <CardEditor
                                                  session={session.clone()}
                                                  on_title_input={props.on_edit_title_input.clone()}
                                                  on_due_input={props.on_edit_due_input.clone()}
                                                  on_save={props.on_save_edit.clone()}
                                                  on_cancel={props.on_cancel_edit.clone()}
                                              />
                                          }
                                      } else {
                                          html! {
                                              <TaskCard
                                                  task={task.clone()}
                                                  is_dragging={props.dragging_task == Some(task_id)}
                                                  on_drag_start={props.on_drag_start.clone()}
                                                  on_drag_end={props.on_drag_end.clone()}
                                                  on_start_edit={props.on_start_edit.clone()}
                                                  on_delete={props.on_delete.clone()}
                                              />
                                          }
                                      }
                                  })
                              }
                          </>
                      }
                  }
              }
          </div>
      </div>
  }
}
