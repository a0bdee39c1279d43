//! Template file contents
//!
//! Context variables: `pascal`, `snake`, `equatable`.

/// Base event type, shared compilation unit with the controller
pub const EVENT_DART: &str = r"part of '{{snake}}_controller.dart';

{{#if equatable}}abstract class {{pascal}}Event extends Equatable {
  const {{pascal}}Event();

  @override
  List<Object> get props => [];
}{{else}}@immutable
abstract class {{pascal}}Event {}{{/if}}
";

/// Base state type plus the `Initial` state
pub const STATE_DART: &str = r"part of '{{snake}}_controller.dart';

{{#if equatable}}abstract class {{pascal}}State extends Equatable {
  const {{pascal}}State();

  @override
  List<Object> get props => [];
}{{else}}@immutable
abstract class {{pascal}}State {}{{/if}}

class {{pascal}}Initial extends {{pascal}}State {}
";

/// Event-driven controller
pub const CONTROLLER_DART: &str = r"import 'dart:async';

import 'package:getbloc/getbloc.dart';
import 'package:{{#if equatable}}equatable/equatable{{else}}meta/meta{{/if}}.dart';

part '{{snake}}_event.dart';
part '{{snake}}_state.dart';

class {{pascal}}Controller extends Controller<{{pascal}}Event, {{pascal}}State> {
  {{pascal}}Controller() : super({{pascal}}Initial());

  @override
  Stream<{{pascal}}State> mapEventToState({{pascal}}Event event) async* {
    // TODO: implement mapEventToState
  }
}
";

/// State-only controller, no events
pub const STATE_CONTROLLER_DART: &str = r"import 'package:getbloc/getbloc.dart';
import 'package:{{#if equatable}}equatable/equatable{{else}}meta/meta{{/if}}.dart';

part '{{snake}}_state.dart';

class {{pascal}}Controller extends StateController<{{pascal}}State> {
  {{pascal}}Controller() : super({{pascal}}Initial());
}
";

/// Page that owns its controller through `Get.put`
pub const PAGE_DART: &str = r"import 'package:flutter/material.dart';
import 'package:get/get.dart';

import 'state/{{snake}}_controller.dart';

class {{pascal}}Page extends StatelessWidget {
  final controller = Get.put({{pascal}}Controller());

  @override
  Widget build(BuildContext context) {
    return Scaffold(
      appBar: AppBar(),
      body: Obx(
        () {
          final state = controller.state;
          if (state is {{pascal}}Initial) {
            return Text('{{pascal}} Initial State');
          }
          return Container();
        },
      ),
    );
  }
}
";

/// `GetView` page; the controller comes from the locator
pub const GET_VIEW_PAGE_DART: &str = r"import 'package:flutter/material.dart';
import 'package:get/get.dart';

import 'state/{{snake}}_controller.dart';

class {{pascal}}Page extends GetView<{{pascal}}Controller> {
  static const String routeName = '/{{snake}}';

  @override
  Widget build(BuildContext context) {
    return Scaffold(
      appBar: AppBar(),
      body: Obx(
        () {
          final state = controller.state;
          if (state is {{pascal}}Initial) {
            return Text('{{pascal}} Initial State');
          }
          return Container();
        },
      ),
    );
  }
}
";

/// Dependency registration, lazily builds the controller
pub const BINDING_DART: &str = r"import 'package:get/get.dart';

import 'state/{{snake}}_controller.dart';

class {{pascal}}Binding extends Bindings {
  @override
  void dependencies() {
    Get.lazyPut(() {
      return {{pascal}}Controller();
    });
  }
}
";
