use eisen_core::drag::{
  DragEnd,
  DragState
};
use eisen_core::editing::{
  EditSession,
  TaskDraft
};
use eisen_core::quadrant::Quadrant;
use eisen_core::store::TaskStore;
use eisen_core::task::Task;
use gloo::console::log;
use uuid::Uuid;
use yew::{
  Callback,
  Html,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::components::{
  MatrixBoard,
  TaskModal
};

#[derive(
  Clone, PartialEq, Default,
)]
pub struct CreateState {
  pub draft: TaskDraft,
  pub error: Option<String>
}

#[function_component(App)]
pub fn app() -> Html {
  let store =
    use_state(TaskStore::seeded);
  let drag =
    use_state(DragState::default);
  let drag_over =
    use_state(|| None::<Quadrant>);
  let editing =
    use_state(|| None::<EditSession>);
  let create =
    use_state(|| None::<CreateState>);

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and hooks \
         initialized"
      );
      || ()
    });
  }

  let on_open_create = {
    let create = create.clone();
    Callback::from(move |_| {
      create.set(Some(
        CreateState::default()
      ));
      ui_debug(
        "action.add_dialog.open",
        "clicked Add Task"
      );
    })
  };

  let on_close_create = {
    let create = create.clone();
    Callback::from(move |_| {
      create.set(None);
      ui_debug(
        "action.add_dialog.cancel",
        "Cancel clicked, closing dialog"
      );
    })
  };

  let on_create_title_input = {
    let create = create.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*create).clone()
        {
          current.draft.title =
            input.value();
          current.error = None;
          create.set(Some(current));
        }
      }
    )
  };

  let on_create_due_input = {
    let create = create.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*create).clone()
        {
          current.draft.due =
            input.value();
          current.error = None;
          create.set(Some(current));
        }
      }
    )
  };

  let on_create_submit = {
    let store = store.clone();
    let create = create.clone();
    Callback::from(move |_| {
      ui_debug(
        "button.create.click",
        "create click fired"
      );
      let Some(state) =
        (*create).clone()
      else {
        return;
      };

      let mut next_store =
        (*store).clone();
      match next_store.create(
        &state.draft.title,
        &state.draft.due
      ) {
        | Some(uuid) => {
          tracing::info!(
            %uuid,
            "task created from dialog"
          );
          store.set(next_store);
          create.set(None);
        }
        | None => {
          let mut next = state;
          next.error = Some(
            "Title and due date are \
             both required."
              .to_string()
          );
          create.set(Some(next));
        }
      }
    })
  };

  let on_start_edit = {
    let store = store.clone();
    let editing = editing.clone();
    Callback::from(move |uuid: Uuid| {
      if let Some(session) =
        EditSession::begin(
          &store, uuid
        )
      {
        editing.set(Some(session));
      }
    })
  };

  let on_edit_title_input = {
    let editing = editing.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*editing).clone()
        {
          current.draft.title =
            input.value();
          editing.set(Some(current));
        }
      }
    )
  };

  let on_edit_due_input = {
    let editing = editing.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*editing).clone()
        {
          current.draft.due =
            input.value();
          editing.set(Some(current));
        }
      }
    )
  };

  let on_save_edit = {
    let store = store.clone();
    let editing = editing.clone();
    Callback::from(move |_| {
      ui_debug(
        "button.save_edit.click",
        "save click fired"
      );
      let Some(session) =
        (*editing).clone()
      else {
        return;
      };

      let mut next_store =
        (*store).clone();
      if session.save(&mut next_store)
      {
        store.set(next_store);
        editing.set(None);
      }
    })
  };

  let on_cancel_edit = {
    let editing = editing.clone();
    Callback::from(move |_| {
      editing.set(None);
      ui_debug(
        "action.edit.cancel",
        "Cancel clicked, dropping \
         draft"
      );
    })
  };

  let on_delete = {
    let store = store.clone();
    Callback::from(move |uuid: Uuid| {
      let mut next_store =
        (*store).clone();
      if next_store.delete(uuid) {
        store.set(next_store);
      }
    })
  };

  let on_drag_start = {
    let store = store.clone();
    let drag = drag.clone();
    Callback::from(move |uuid: Uuid| {
      drag.set(
        (*drag).begin(&store, uuid)
      );
    })
  };

  let on_drag_end = {
    let drag = drag.clone();
    let drag_over = drag_over.clone();
    Callback::from(move |_| {
      drag.set((*drag).settle());
      drag_over.set(None);
    })
  };

  let on_drag_over = {
    let drag_over = drag_over.clone();
    Callback::from(
      move |quadrant: Quadrant| {
        if *drag_over != Some(quadrant)
        {
          tracing::debug!(
            quadrant =
              quadrant.as_key(),
            "drag over quadrant"
          );
          drag_over
            .set(Some(quadrant));
        }
      }
    )
  };

  let on_drop = {
    let store = store.clone();
    let drag = drag.clone();
    let drag_over = drag_over.clone();
    Callback::from(
      move |(uuid, target_key): (
        Uuid,
        String
      )| {
        let (next_drag, end) = (*drag)
          .finish(
            uuid,
            Some(target_key.as_str())
          );
        drag.set(next_drag);
        drag_over.set(None);

        if let DragEnd::Reassign {
          task,
          target
        } = end
        {
          let mut next_store =
            (*store).clone();
          if next_store
            .reassign(task, target)
          {
            store.set(next_store);
          }
        }
      }
    )
  };

  let tasks: Vec<Task> =
    store.iter().cloned().collect();

  html! {
      <div class="matrix-page">
          <div class="matrix-header">
              <div>
                  <h1>{ "Eisenhower Matrix" }</h1>
                  <p class="matrix-subtitle">{ "Organize tasks by importance and urgency" }</p>
              </div>
              <button class="btn primary" onclick={on_open_create}>{ "+ Add Task" }</button>
          </div>

          <MatrixBoard
              tasks={tasks}
              editing={(*editing).clone()}
              dragging_task={(*drag).active()}
              drag_over={*drag_over}
              on_drop={on_drop}
              on_drag_start={on_drag_start}
              on_drag_end={on_drag_end}
              on_drag_over={on_drag_over}
              on_start_edit={on_start_edit}
              on_edit_title_input={on_edit_title_input}
              on_edit_due_input={on_edit_due_input}
              on_save_edit={on_save_edit}
              on_cancel_edit={on_cancel_edit}
              on_delete={on_delete}
          />

          {
              if let Some(state) = (*create).clone() {
                  html! {
                      <TaskModal
                          draft={state.draft}
                          error={state.error}
                          on_title_input={on_create_title_input}
                          on_due_input={on_create_due_input}
                          on_submit={on_create_submit}
                          on_cancel={on_close_create}
                      />
                  }
              } else {
                  html! {}
              }
          }

          <p class="matrix-hint">
              { "Drag tasks between quadrants to organize by priority. Click a task's title or date to edit it. Hover over a task to delete it." }
          </p>
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
